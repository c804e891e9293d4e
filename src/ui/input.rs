use crate::ui::app::{App, PopupKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.show_popup() {
        match key.code {
            KeyCode::Esc => app.close_popup(),
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Char('?') => {
                app.toggle_popup(PopupKind::Help);
            }
            KeyCode::Char('o') => {
                app.toggle_popup(PopupKind::Outline);
            }
            _ => {}
        }
        return;
    }

    let big_step = app.config().big_step;
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('?') => {
            app.toggle_popup(PopupKind::Help);
        }
        KeyCode::Char('o') => {
            app.toggle_popup(PopupKind::Outline);
        }
        KeyCode::Down | KeyCode::Right if shift => app.advance(big_step),
        KeyCode::Up | KeyCode::Left if shift => app.retreat(big_step),
        KeyCode::Down
        | KeyCode::Right
        | KeyCode::Enter
        | KeyCode::PageDown
        | KeyCode::Char(' ' | 'j' | 'l') => app.advance(1),
        KeyCode::Up
        | KeyCode::Left
        | KeyCode::Backspace
        | KeyCode::PageUp
        | KeyCode::Char('k' | 'h') => app.retreat(1),
        KeyCode::Home | KeyCode::Char('g') => app.reset(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_end(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
