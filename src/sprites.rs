use crate::event::ActionKind;
use crate::pet::Species;

/// What the pet is doing on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Eat,
    Play,
    Sleep,
}

impl Pose {
    pub fn for_action(action: Option<ActionKind>) -> Self {
        match action {
            None => Pose::Idle,
            Some(ActionKind::Feed) => Pose::Eat,
            Some(ActionKind::Play) => Pose::Play,
            Some(ActionKind::Sleep) => Pose::Sleep,
        }
    }
}

const IDLE_EYES: [&str; 3] = ["•.•", "•_•", "-_-"];

struct Face {
    eyes: &'static str,
    mouth: char,
    trail: &'static str,
}

fn face(pose: Pose, frame: u64) -> Face {
    let two = (frame % 2) as usize;
    match pose {
        Pose::Idle => Face {
            eyes: IDLE_EYES[(frame % 3) as usize],
            mouth: '^',
            trail: "",
        },
        Pose::Eat => Face {
            eyes: "•.•",
            mouth: ['w', 'o'][two],
            trail: "",
        },
        Pose::Play => Face {
            eyes: ["^.^", "^o^"][two],
            mouth: '^',
            trail: "",
        },
        Pose::Sleep => Face {
            eyes: "-.-",
            mouth: '^',
            trail: [" z", " zz"][two],
        },
    }
}

/// Three text rows for the pet. Idle cycles over three frames, action poses
/// alternate between two.
pub fn sprite(species: Species, pose: Pose, frame: u64) -> [String; 3] {
    let f = face(pose, frame);
    let head = format!(" ( {} ){}", f.eyes, f.trail);
    match species {
        Species::Cat => [
            "  /\\_/\\".to_string(),
            head,
            format!("  > {} <", f.mouth),
        ],
        Species::Dog => [
            "  /^ ^\\".to_string(),
            head,
            format!("  u {} u", f.mouth),
        ],
        Species::Bunny => [
            "  (\\_/)".to_string(),
            head,
            format!("  (\"{}\")", f.mouth),
        ],
    }
}
