use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    Reset,
    Increment,
}

impl Intent for PageIntent {}
