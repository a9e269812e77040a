use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// A printable character was typed into the box.
    Input { ch: char },
    Backspace,
    Clear,
}

impl Intent for SearchIntent {}
