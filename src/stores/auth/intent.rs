use crate::model::Session;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    SessionReplaced(Session),
    Reset,
}

impl Intent for AuthIntent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshIntent {
    Succeeded,
    Failed,
}

impl Intent for RefreshIntent {}
