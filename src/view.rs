use crate::app::App;
use crate::event::{ActionKind, MENU};
use crate::fx::{CANVAS_H, CANVAS_W};
use crate::sprites::{sprite, Pose};
use crate::theme::{Theme, Tier};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

const BAR_CELLS: u8 = 10;
const ART_PANEL_W: u16 = CANVAS_W as u16 + 6;
const ART_PANEL_H: u16 = CANVAS_H as u16 + 4;
const SPINNER: [&str; 4] = ["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

/// What occupies a canvas cell, used to pick its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Empty,
    StarDim,
    StarBright,
    Pet,
    Particle,
}

/// Right-hand panel content, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode<'a> {
    Rename(&'a str),
    Help,
    Busy(ActionKind),
    Status(&'a str),
    Stats,
}

pub fn panel_mode(app: &App) -> PanelMode<'_> {
    if let Some(buf) = app.rename_buffer() {
        return PanelMode::Rename(buf);
    }
    if app.help_visible() {
        return PanelMode::Help;
    }
    if let (true, Some(kind)) = (app.is_busy(), app.active_action()) {
        return PanelMode::Busy(kind);
    }
    if let Some(msg) = app.status() {
        return PanelMode::Status(msg);
    }
    PanelMode::Stats
}

/// `value / 10` filled cells out of ten. Out-of-range values clamp.
pub fn bar(value: u8) -> String {
    let filled = value.min(100) / BAR_CELLS;
    let mut s = String::with_capacity(BAR_CELLS as usize * 3);
    for i in 0..BAR_CELLS {
        s.push(if i < filled { '█' } else { '░' });
    }
    s
}

/// Stars, then the centred pet, then particles, on a fixed character grid.
pub fn compose_canvas(app: &App) -> Vec<Vec<(char, Layer)>> {
    let mut grid = vec![vec![(' ', Layer::Empty); CANVAS_W]; CANVAS_H];

    for s in app.stars() {
        if s.x < CANVAS_W && s.y < CANVAS_H {
            grid[s.y][s.x] = if s.on {
                ('•', Layer::StarBright)
            } else {
                ('·', Layer::StarDim)
            };
        }
    }

    let pose = if app.is_busy() {
        Pose::for_action(app.active_action())
    } else {
        Pose::Idle
    };
    let art = sprite(app.pet().species, pose, app.frame());
    let top = (CANVAS_H - art.len()) / 2;
    for (row, line) in art.iter().enumerate() {
        let pad = CANVAS_W.saturating_sub(line.chars().count()) / 2;
        for (i, ch) in line.chars().enumerate() {
            let x = pad + i;
            if x >= CANVAS_W {
                break;
            }
            grid[top + row][x] = (ch, Layer::Pet);
        }
    }

    for p in app.particles() {
        if let Some((x, y)) = p.cell() {
            grid[y][x] = (p.glyph, Layer::Particle);
        }
    }
    grid
}

pub fn canvas_rows(app: &App) -> Vec<String> {
    compose_canvas(app)
        .into_iter()
        .map(|row| row.into_iter().map(|(ch, _)| ch).collect())
        .collect()
}

pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = f.size();
    f.render_widget(Block::default().style(theme.base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .vertical_margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(ART_PANEL_W), Constraint::Min(0)])
        .split(rows[0]);
    let art_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ART_PANEL_H), Constraint::Min(0)])
        .split(cols[0])[0];

    render_art(f, art_area, app, &theme);
    render_panel(f, cols[1], app, &theme);
    render_footer(f, rows[1], app, &theme);
}

fn render_art(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let lines: Vec<Line> = compose_canvas(app)
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, layer)| {
                        let style = match layer {
                            Layer::Empty => Style::default(),
                            Layer::StarDim => Style::default().fg(theme.star_dim),
                            Layer::StarBright => Style::default()
                                .fg(theme.star_bright)
                                .add_modifier(Modifier::BOLD),
                            Layer::Pet => Style::default().fg(theme.text),
                            Layer::Particle => Style::default()
                                .fg(theme.particle)
                                .add_modifier(Modifier::BOLD),
                        };
                        Span::styled(ch.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.art_border))
        .padding(Padding::new(2, 2, 1, 1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_panel(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let pet = app.pet();
    let mut lines = vec![
        Line::from(Span::styled(" BitBuddy ✨ ", theme.title())),
        Line::from(vec![
            Span::styled(pet.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" the {}", pet.species.label()),
                Style::default().fg(theme.hint),
            ),
        ]),
        Line::default(),
    ];

    match panel_mode(app) {
        PanelMode::Rename(buf) => {
            lines.push(Line::from("Rename your pet"));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::raw("Name: "),
                Span::styled(
                    format!("{buf}_"),
                    Style::default()
                        .fg(theme.selected)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::default());
            lines.push(Line::styled(
                "enter save · esc cancel · backspace delete",
                Style::default().fg(theme.hint),
            ));
        }
        PanelMode::Help => {
            for (keys, what) in HELP {
                lines.push(Line::from(vec![
                    Span::styled(format!("{keys:<9}"), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(what),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::styled(
                "? or esc to close",
                Style::default().fg(theme.hint),
            ));
        }
        PanelMode::Busy(kind) => {
            let spin = SPINNER[(app.frame() % SPINNER.len() as u64) as usize];
            lines.push(Line::from(vec![
                Span::styled(spin, Style::default().fg(theme.spinner)),
                Span::raw(format!(" {}...", kind.progress_label())),
            ]));
            lines.push(Line::default());
            push_menu(&mut lines, app, theme);
        }
        PanelMode::Status(msg) => {
            lines.push(Line::styled(
                msg.to_string(),
                Style::default()
                    .fg(theme.status)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::default());
            push_menu(&mut lines, app, theme);
        }
        PanelMode::Stats => {
            for (label, stat) in [
                ("Hunger", pet.hunger),
                ("Happiness", pet.happiness),
                ("Energy", pet.energy),
            ] {
                let v = stat.get();
                lines.push(Line::from(vec![
                    Span::raw(format!("{label:<10} ")),
                    Span::styled(bar(v), theme.bar(Tier::of(v))),
                    Span::styled(format!(" {v:>3}"), Style::default().fg(theme.hint)),
                ]));
            }
            lines.push(Line::default());
            push_menu(&mut lines, app, theme);
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.panel_border))
        .padding(Padding::new(2, 2, 1, 1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn push_menu(lines: &mut Vec<Line<'static>>, app: &App, theme: &Theme) {
    for (i, item) in MENU.iter().enumerate() {
        let selected = i == app.selected();
        let cursor = if selected { ">" } else { " " };
        lines.push(Line::styled(
            format!("{cursor} {}", item.label()),
            theme.menu_item(selected, app.is_busy()),
        ));
    }
}

const HELP: [(&str, &str); 8] = [
    ("↑/k ↓/j", "move"),
    ("enter", "do the selected thing"),
    ("r", "rename"),
    ("s", "next species"),
    ("t", "light/dark theme"),
    ("?", "this help"),
    ("q", "save and quit"),
    ("ctrl-c", "quit from anywhere"),
];

fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let text = if app.is_renaming() {
        "typing a name · enter save · esc cancel"
    } else {
        "q quit · ? help · t theme · s species"
    };
    let line = Line::from(vec![
        Span::styled(text, Style::default().fg(theme.hint)),
        Span::styled(
            format!("  [{}]", theme.name),
            Style::default().fg(theme.hint).add_modifier(Modifier::DIM),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::pet::Pet;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn starless_app() -> App {
        let settings = Settings {
            star_count: 0,
            ..Settings::default()
        };
        App::with_rng(Pet::default(), &settings, StdRng::seed_from_u64(5))
    }

    #[test]
    fn bar_fills_in_tenths() {
        assert_eq!(bar(0), "░░░░░░░░░░");
        assert_eq!(bar(55), "█████░░░░░");
        assert_eq!(bar(100), "██████████");
        assert_eq!(bar(250), "██████████");
    }

    #[test]
    fn idle_canvas_centres_the_pet() {
        let rows = canvas_rows(&starless_app());
        assert_eq!(rows.len(), CANVAS_H);
        assert!(rows.iter().all(|r| r.chars().count() == CANVAS_W));
        assert_eq!(rows[0].trim(), "");
        assert_eq!(rows[2].trim(), "/\\_/\\");
        assert_eq!(rows[3].trim(), "( •.• )");
        assert_eq!(rows[4].trim(), "> ^ <");
    }

    #[test]
    fn empty_app_shows_stats() {
        assert_eq!(panel_mode(&starless_app()), PanelMode::Stats);
    }
}
