//! Flashcard creation form.

use super::{edit_text, key_press};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, TextInput};
use crate::widgets::{DialogVariant, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Question,
    Answer,
}

#[derive(Debug, Default)]
pub struct CreateFlashcardScreen {
    question: TextInput,
    answer: TextInput,
    focus: FormField,
}

impl CreateFlashcardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn question(&self) -> &TextInput {
        &self.question
    }

    pub fn answer(&self) -> &TextInput {
        &self.answer
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Question => &mut self.question,
            FormField::Answer => &mut self.answer,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Question => FormField::Answer,
            FormField::Answer => FormField::Question,
        };
    }

    fn save(&mut self, ctx: &mut ScreenContext) -> ScreenAction {
        match ctx
            .session
            .add_flashcard(self.question.text(), self.answer.text())
        {
            Ok(card) => {
                info!("Saved flashcard: {}", card.question());
                let content = format!("\"{}\" was added to your saved flashcards.", card.question());
                self.question.clear();
                self.answer.clear();
                self.focus = FormField::Question;
                ScreenAction::ShowNotice {
                    title: "Flashcard Saved".to_string(),
                    content,
                    variant: DialogVariant::Success,
                }
            }
            Err(err) => ScreenAction::error_notice(err.title(), err.to_string()),
        }
    }
}

impl Screen for CreateFlashcardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let column = center_rect(area, 60, 9);
        let [heading, _, question, _, answer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new("Create a new flashcard")
                .style(theme().title_style())
                .alignment(Alignment::Center),
            heading,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.question)
                .title("Question")
                .placeholder("Type your question...")
                .focused(self.focus == FormField::Question),
            question,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.answer)
                .title("Answer")
                .placeholder("Type the answer...")
                .focused(self.focus == FormField::Answer),
            answer,
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = match edit_text(self.focused_input(), key, ctx.keymap()) {
            Some(Action::Save) => self.save(ctx),
            Some(Action::Confirm) => match self.focus {
                FormField::Question => {
                    self.focus = FormField::Answer;
                    ScreenAction::None
                }
                FormField::Answer => self.save(ctx),
            },
            Some(Action::NextTab | Action::PrevTab | Action::MoveUp | Action::MoveDown) => {
                self.switch_focus();
                ScreenAction::None
            }
            Some(Action::Cancel) => ScreenAction::Back,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_hints(&[
            (Action::NextTab, "Next Field"),
            (Action::Save, "Save"),
            (Action::Cancel, "Back"),
        ])
    }
}
