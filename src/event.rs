use crate::pet::Pet;
use crossterm::event::KeyEvent;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Feed,
    Play,
    Sleep,
}

impl ActionKind {
    pub fn apply(self, pet: &mut Pet) {
        match self {
            ActionKind::Feed => pet.feed(),
            ActionKind::Play => pet.play(),
            ActionKind::Sleep => pet.sleep(),
        }
    }

    pub fn done_message(self) -> &'static str {
        match self {
            ActionKind::Feed => "Yum, that was tasty!",
            ActionKind::Play => "Weee, that was fun!",
            ActionKind::Sleep => "Zzzz...",
        }
    }

    pub fn progress_label(self) -> &'static str {
        match self {
            ActionKind::Feed => "Feeding",
            ActionKind::Play => "Playing",
            ActionKind::Sleep => "Sleeping",
        }
    }
}

/// Entries of the action menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Action(ActionKind),
    Rename,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Action(ActionKind::Feed) => "Feed",
            MenuItem::Action(ActionKind::Play) => "Play",
            MenuItem::Action(ActionKind::Sleep) => "Sleep",
            MenuItem::Rename => "Rename",
        }
    }
}

pub const MENU: [MenuItem; 4] = [
    MenuItem::Action(ActionKind::Feed),
    MenuItem::Action(ActionKind::Play),
    MenuItem::Action(ActionKind::Sleep),
    MenuItem::Rename,
];

/// Symbolic user input, already resolved against the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Up,
    Down,
    Confirm,
    ToggleHelp,
    ToggleTheme,
    CycleSpecies,
    Rename,
    Backspace,
    Cancel,
    Char(char),
}

/// Everything the event loop reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    DecayTick,
    AnimTick,
    Key(KeyEvent),
    Resize(u16, u16),
    ActionComplete(ActionKind),
    StatusExpired(u64),
}

/// Side effects requested by a transition; the runtime carries them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule { after: Duration, msg: Msg },
    Save,
    Quit,
}
