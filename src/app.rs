use crate::config::{Settings, Timings};
use crate::event::{ActionKind, Effect, Input, MenuItem, Msg, MENU};
use crate::fx::{self, Particle, Star};
use crate::input::map_key;
use crate::pet::Pet;
use crate::theme::Theme;
use rand::{rngs::StdRng, SeedableRng};

pub const NAME_MAX: usize = 18;

/// The whole session: the pet plus every piece of UI state. Only the event
/// loop holds one, and it changes only through [`App::update`].
pub struct App {
    pet: Pet,
    selected: usize,
    busy: bool,
    active_action: Option<ActionKind>,
    status: Option<String>,
    status_token: u64,
    frame: u64,
    particles: Vec<Particle>,
    stars: Vec<Star>,
    help_visible: bool,
    theme_dark: bool,
    rename: Option<String>,
    viewport: (u16, u16),
    timings: Timings,
    star_count: usize,
    rng: StdRng,
}

impl App {
    pub fn new(pet: Pet, settings: &Settings) -> Self {
        Self::with_rng(pet, settings, StdRng::from_entropy())
    }

    pub fn with_rng(pet: Pet, settings: &Settings, mut rng: StdRng) -> Self {
        let stars = fx::seed_stars(settings.star_count, &mut rng);
        Self {
            pet,
            selected: 0,
            busy: false,
            active_action: None,
            status: None,
            status_token: 0,
            frame: 0,
            particles: Vec::new(),
            stars,
            help_visible: false,
            theme_dark: settings.dark_theme,
            rename: None,
            viewport: (0, 0),
            timings: settings.timings,
            star_count: settings.star_count,
            rng,
        }
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn active_action(&self) -> Option<ActionKind> {
        self.active_action
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn theme_dark(&self) -> bool {
        self.theme_dark
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_dark)
    }

    pub fn is_renaming(&self) -> bool {
        self.rename.is_some()
    }

    pub fn rename_buffer(&self) -> Option<&str> {
        self.rename.as_deref()
    }

    /// Last size reported by the terminal. Only bookkeeping: drawing always
    /// uses the frame area ratatui hands out.
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Applies one message and returns the follow-up work for the runtime.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::DecayTick => {
                self.pet.decay();
                tracing::debug!(
                    hunger = self.pet.hunger.get(),
                    happiness = self.pet.happiness.get(),
                    energy = self.pet.energy.get(),
                    "decay"
                );
                Vec::new()
            }
            Msg::AnimTick => {
                self.frame = self.frame.wrapping_add(1);
                fx::step(&mut self.particles, self.active_action, &mut self.rng);
                fx::twinkle(&mut self.stars, &mut self.rng);
                Vec::new()
            }
            Msg::Key(key) => match map_key(&key, self.is_renaming()) {
                Some(input) => self.handle_input(input),
                None => Vec::new(),
            },
            Msg::Resize(w, h) => {
                self.viewport = (w, h);
                tracing::debug!(width = w, height = h, "resize");
                if self.stars.is_empty() {
                    self.stars = fx::seed_stars(self.star_count, &mut self.rng);
                }
                Vec::new()
            }
            Msg::ActionComplete(kind) => self.complete(kind),
            Msg::StatusExpired(token) => {
                if token == self.status_token {
                    self.status = None;
                }
                Vec::new()
            }
        }
    }

    pub fn handle_input(&mut self, input: Input) -> Vec<Effect> {
        if input == Input::Quit {
            tracing::info!(busy = self.busy, "quit requested");
            return vec![Effect::Save, Effect::Quit];
        }
        if self.is_renaming() {
            return self.handle_rename(input);
        }
        if self.busy {
            return Vec::new();
        }

        match input {
            Input::Up => self.selected = self.selected.saturating_sub(1),
            Input::Down => self.selected = (self.selected + 1).min(MENU.len() - 1),
            Input::Confirm => return self.confirm(),
            Input::ToggleHelp => self.help_visible = !self.help_visible,
            Input::ToggleTheme => self.theme_dark = !self.theme_dark,
            Input::CycleSpecies => {
                self.pet.cycle_species();
                tracing::debug!(species = self.pet.species.label(), "species changed");
            }
            Input::Rename => self.open_rename(),
            Input::Cancel => self.help_visible = false,
            Input::Quit | Input::Backspace | Input::Char(_) => {}
        }
        Vec::new()
    }

    fn confirm(&mut self) -> Vec<Effect> {
        match MENU[self.selected] {
            MenuItem::Rename => {
                self.open_rename();
                Vec::new()
            }
            MenuItem::Action(kind) => {
                tracing::debug!(action = ?kind, "action started");
                self.busy = true;
                self.active_action = Some(kind);
                self.status = None;
                self.particles = fx::burst(kind, &mut self.rng);
                vec![Effect::Schedule {
                    after: self.timings.action(),
                    msg: Msg::ActionComplete(kind),
                }]
            }
        }
    }

    fn complete(&mut self, kind: ActionKind) -> Vec<Effect> {
        if !self.busy || self.active_action != Some(kind) {
            tracing::debug!(action = ?kind, "ignoring stale completion");
            return Vec::new();
        }
        kind.apply(&mut self.pet);
        self.busy = false;
        self.active_action = None;
        self.particles.clear();
        self.set_status(kind.done_message().to_string())
    }

    fn open_rename(&mut self) {
        self.rename = Some(self.pet.name.clone());
    }

    fn handle_rename(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Confirm => {
                let buf = self.rename.take().unwrap_or_default();
                let name = buf.trim();
                if name.is_empty() {
                    return Vec::new();
                }
                self.pet.rename(name);
                tracing::info!(name, "pet renamed");
                let mut effects = vec![Effect::Save];
                effects.extend(self.set_status(format!("Renamed to {name}!")));
                effects
            }
            Input::Cancel => {
                self.rename = None;
                Vec::new()
            }
            Input::Backspace => {
                if let Some(buf) = self.rename.as_mut() {
                    buf.pop();
                }
                Vec::new()
            }
            Input::Char(ch) => {
                if let Some(buf) = self.rename.as_mut() {
                    if buf.chars().count() < NAME_MAX {
                        buf.push(ch);
                    }
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn set_status(&mut self, text: String) -> Vec<Effect> {
        self.status_token = self.status_token.wrapping_add(1);
        self.status = Some(text);
        vec![Effect::Schedule {
            after: self.timings.status(),
            msg: Msg::StatusExpired(self.status_token),
        }]
    }
}
