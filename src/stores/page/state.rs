use crate::mvi::State;

/// Pages are zero-based, matching the server's pageable API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub current: u32,
}

impl State for PageState {}

impl PageState {
    pub fn is_first(&self) -> bool {
        self.current == 0
    }
}
