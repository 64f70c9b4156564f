//! Rendered frames, checked through ratatui's in-memory backend.

use bitbuddy::app::App;
use bitbuddy::config::Settings;
use bitbuddy::event::{ActionKind, Input, Msg};
use bitbuddy::pet::{Pet, Stat};
use bitbuddy::view::{self, panel_mode, PanelMode};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::TestBackend, Terminal};

fn app_with(pet: Pet) -> App {
    App::with_rng(pet, &Settings::default(), StdRng::seed_from_u64(3))
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| view::draw(f, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn default_frame_shows_bars_and_menu() {
    let pet = Pet {
        hunger: Stat::new(80),
        happiness: Stat::new(30),
        energy: Stat::new(5),
        ..Pet::new("Pip")
    };
    let screen = render(&app_with(pet));
    assert!(screen.contains("BitBuddy"));
    assert!(screen.contains("Pip the Cat"));
    assert!(screen.contains("Hunger     ████████░░"));
    assert!(screen.contains("Happiness  ███░░░░░░░"));
    assert!(screen.contains("Energy     ░░░░░░░░░░"));
    assert!(screen.contains("> Feed"));
    assert!(screen.contains("  Play"));
    assert!(screen.contains("  Rename"));
}

#[test]
fn busy_frame_shows_progress_instead_of_bars() {
    let mut app = app_with(Pet::default());
    app.handle_input(Input::Down);
    app.handle_input(Input::Confirm);
    let screen = render(&app);
    assert!(screen.contains("Playing..."));
    assert!(!screen.contains("Hunger"));
    assert!(screen.contains("> Play"));
}

#[test]
fn status_frame_shows_message() {
    let mut app = app_with(Pet::default());
    app.handle_input(Input::Confirm);
    app.update(Msg::ActionComplete(ActionKind::Feed));
    let screen = render(&app);
    assert!(screen.contains("Yum, that was tasty!"));
    assert!(!screen.contains("Hunger"));
}

#[test]
fn panel_priority_is_rename_help_busy_status_stats() {
    let mut app = app_with(Pet::default());
    assert_eq!(panel_mode(&app), PanelMode::Stats);

    app.handle_input(Input::Confirm);
    app.update(Msg::ActionComplete(ActionKind::Feed));
    assert_eq!(panel_mode(&app), PanelMode::Status("Yum, that was tasty!"));

    app.handle_input(Input::Confirm);
    assert_eq!(panel_mode(&app), PanelMode::Busy(ActionKind::Feed));
    app.update(Msg::ActionComplete(ActionKind::Feed));

    app.handle_input(Input::ToggleHelp);
    assert_eq!(panel_mode(&app), PanelMode::Help);

    app.handle_input(Input::Rename);
    assert_eq!(panel_mode(&app), PanelMode::Rename("BitBuddy"));
    let screen = render(&app);
    assert!(screen.contains("Name: BitBuddy_"));
}

#[test]
fn rendering_does_not_touch_state() {
    let mut app = app_with(Pet::default());
    app.handle_input(Input::Confirm);
    let before = (app.pet().clone(), app.frame(), app.particles().to_vec());
    render(&app);
    render(&app);
    assert_eq!((app.pet().clone(), app.frame(), app.particles().to_vec()), before);
}

#[test]
fn tiny_terminal_still_renders() {
    let app = app_with(Pet::default());
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    terminal.draw(|f| view::draw(f, &app)).unwrap();
}

#[test]
fn sprite_follows_action_frames() {
    let mut app = app_with(Pet::default());
    let idle = view::canvas_rows(&app);
    assert!(idle[3].contains("( •.• )"));

    app.handle_input(Input::Down);
    app.handle_input(Input::Down);
    app.handle_input(Input::Confirm);
    // Sleep pose, frame 0
    let rows = view::canvas_rows(&app);
    assert!(rows[3].contains("( -.- ) z"));
}
