//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use std::{sync::Arc, time::Duration};

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};
use tracing::{error, info};

use crate::{
    game::{CalorieGame, GuessHigher, GuessLower, QuitGame, RestartGame},
    provider::RecipeProvider,
};

pub fn run(provider: Arc<dyn RecipeProvider>, reveal_delay: Duration) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("up", GuessHigher, None),
            KeyBinding::new("w", GuessHigher, None),
            KeyBinding::new("h", GuessHigher, None),
            KeyBinding::new("down", GuessLower, None),
            KeyBinding::new("s", GuessLower, None),
            KeyBinding::new("l", GuessLower, None),
            KeyBinding::new("enter", RestartGame, None),
            KeyBinding::new("r", RestartGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let bounds = Bounds::centered(None, size(px(880.), px(820.)), cx);
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| CalorieGame::new(provider, reveal_delay, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!(%err, "failed to open window");
                cx.quit();
                return;
            }
        };

        if let Err(err) = window.update(cx, |view: &mut CalorieGame, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        }) {
            error!(%err, "failed to focus game window");
        }

        cx.on_action(|_: &QuitGame, cx| {
            info!("quit requested");
            cx.quit();
        });
        cx.activate(true);
    });
}
