use ratatui::style::{Color, Modifier, Style};

/// Value band of a stat bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn of(value: u8) -> Self {
        match value {
            0..=24 => Tier::Low,
            25..=49 => Tier::Medium,
            _ => Tier::High,
        }
    }
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Every color the view uses, resolved once from the light/dark toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub text: Color,
    pub title_fg: Color,
    pub title_bg: Color,
    pub art_border: Color,
    pub panel_border: Color,
    pub status: Color,
    pub menu: Color,
    pub selected: Color,
    pub hint: Color,
    pub spinner: Color,
    pub star_dim: Color,
    pub star_bright: Color,
    pub particle: Color,
    pub bar_low: Color,
    pub bar_medium: Color,
    pub bar_high: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        name: "light",
        bg: Color::Reset,
        text: Color::Reset,
        title_fg: hex(0x0A0A0B),
        title_bg: hex(0x7DD3FC),
        art_border: hex(0x334155),
        panel_border: hex(0x38BDF8),
        status: hex(0x04B575),
        menu: Color::Indexed(240),
        selected: hex(0x38BDF8),
        hint: Color::Indexed(240),
        spinner: hex(0x00BFFF),
        star_dim: hex(0x94A3B8),
        star_bright: hex(0x475569),
        particle: hex(0xDB2777),
        bar_low: hex(0xEF4444),
        bar_medium: hex(0xF59E0B),
        bar_high: hex(0x10B981),
    };

    pub const DARK: Theme = Theme {
        name: "dark",
        bg: hex(0x0F172A),
        text: hex(0xE2E8F0),
        title_fg: hex(0x0F172A),
        title_bg: hex(0xA78BFA),
        art_border: hex(0x475569),
        panel_border: hex(0xA78BFA),
        status: hex(0x34D399),
        menu: hex(0x94A3B8),
        selected: hex(0xC4B5FD),
        hint: hex(0x64748B),
        spinner: hex(0xA78BFA),
        star_dim: hex(0x64748B),
        star_bright: hex(0xF8FAFC),
        particle: hex(0xF9A8D4),
        bar_low: hex(0xF87171),
        bar_medium: hex(0xFBBF24),
        bar_high: hex(0x34D399),
    };

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .bg(self.title_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bar(&self, tier: Tier) -> Style {
        let fg = match tier {
            Tier::Low => self.bar_low,
            Tier::Medium => self.bar_medium,
            Tier::High => self.bar_high,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn menu_item(&self, selected: bool, dimmed: bool) -> Style {
        let s = if selected {
            Style::default()
                .fg(self.selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.menu)
        };
        if dimmed {
            s.add_modifier(Modifier::DIM)
        } else {
            s
        }
    }
}
