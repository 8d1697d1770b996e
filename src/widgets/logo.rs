//! The [`RemoraLogo`] widget renders the splash-screen banner.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

/// A widget that renders the Remora banner, centered in its area.
///
/// ```text
/// ┏━┓┏━╸┏┳┓┏━┓┏━┓┏━┓
/// ┣┳┛┣╸ ┃┃┃┃ ┃┣┳┛┣━┫
/// ╹┗╸┗━╸╹ ╹┗━┛╹┗╸╹ ╹
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemoraLogo;

const BANNER: &str = indoc! {"
    ┏━┓┏━╸┏┳┓┏━┓┏━┓┏━┓
    ┣┳┛┣╸ ┃┃┃┃ ┃┣┳┛┣━┫
    ╹┗╸┗━╸╹ ╹┗━┛╹┗╸╹ ╹"};

impl RemoraLogo {
    pub const HEIGHT: u16 = 3;

    /// The raw banner text
    pub fn as_str() -> &'static str {
        BANNER
    }
}

impl Widget for RemoraLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::raw(BANNER))
            .style(theme().title_style())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_has_three_lines() {
        assert_eq!(RemoraLogo::as_str().lines().count(), RemoraLogo::HEIGHT as usize);
    }

    #[test]
    fn test_render_centers_banner() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        RemoraLogo.render(buf.area, &mut buf);
        // 18 columns wide, so 6 blank columns on the left
        assert_eq!(buf[(6, 0)].symbol(), "┏");
    }
}
