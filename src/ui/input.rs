use crate::ui::app::{App, EditorKey, Overlay};
use crate::ui::pages::login::LoginIntent;
use crate::ui::pages::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    if app.route() == Route::Login {
        handle_login_key(app, key);
        return;
    }

    match app.overlay() {
        Overlay::Editor => handle_editor_key(app, key),
        Overlay::Confirm => handle_confirm_key(app, key),
        Overlay::None => handle_page_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_intent(LoginIntent::SwitchField)
        }
        KeyCode::Backspace => app.login_intent(LoginIntent::Backspace),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if !has_ctrl(key) => app.login_intent(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let editor_key = match key.code {
        KeyCode::Esc => EditorKey::Cancel,
        KeyCode::Enter => EditorKey::Submit,
        KeyCode::Tab | KeyCode::Down => EditorKey::FocusNext,
        KeyCode::BackTab | KeyCode::Up => EditorKey::FocusPrev,
        KeyCode::Backspace => EditorKey::Backspace,
        KeyCode::Char(ch) if !has_ctrl(key) => EditorKey::Input(ch),
        _ => return,
    };
    app.editor_key(editor_key);
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_delete(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_delete(false),
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.navigate(app.route().next_tab()),
        KeyCode::BackTab => app.navigate(app.route().prev_tab()),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(route) = Route::from_digit(digit) {
                app.navigate(route);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char('a') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('x') => app.dismiss_errors(),
        KeyCode::Char(']') => app.cycle_seat_room(true),
        KeyCode::Char('[') => app.cycle_seat_room(false),
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle)) && has_ctrl(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore, Overrides};
    use crate::store::Command;
    use tokio::sync::mpsc;

    fn make_app() -> (App, mpsc::Receiver<Command>) {
        let mut config = Config::default();
        config.auth.required = false;
        let (tx, rx) = mpsc::channel(64);
        let mut app = App::new(ConfigStore::new(config, "config.toml".into()), tx);
        app.start(Route::Dashboard);
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn digits_and_tab_switch_pages() {
        let (mut app, _rx) = make_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route(), Route::Rooms);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Seats);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route(), Route::Rooms);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.route(), Route::Rooms);
    }

    #[test]
    fn typing_in_editor_does_not_navigate() {
        let (mut app, _rx) = make_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.overlay(), Overlay::Editor);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.route(), Route::Cinemas);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay(), Overlay::None);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let (mut app, _rx) = make_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_r_applies_the_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nrequired = false\n").unwrap();
        let store = ConfigStore::load(path.clone(), Overrides::default()).unwrap();
        let (tx, _rx) = mpsc::channel(64);
        let mut app = App::new(store, tx);
        app.start(Route::Cinemas);
        assert_eq!(app.route(), Route::Cinemas);

        std::fs::write(&path, "[auth]\nrequired = true\nemail = \"ops@example.com\"\n").unwrap();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.login().email(), "ops@example.com");
    }
}
