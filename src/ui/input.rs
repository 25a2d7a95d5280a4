use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit_key(key) {
        app.request_quit();
        return;
    }

    app.like_button().handle_key(key);
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    // Nothing to hit before the first frame.
    let Some(area) = app.like_area() else {
        return;
    };
    app.like_button().handle_mouse(event, area);
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')))
}
