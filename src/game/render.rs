//! file: render.rs
//! author: Jacob Xie
//! date: 2025/12/20 13:01:47 Saturday
//! brief:

use gpui::{
    AnyElement, Context, Div, Focusable, FontWeight, Pixels, Render, Window, div, img, prelude::*,
    px, rgb, rgba,
};

use super::{CalorieGame, Candidate, Guess, GuessHigher, GuessLower, Phase, RestartGame};

const CARD_WIDTH: f32 = 380.;
const PICTURE_SIZE: f32 = 224.;

impl Render for CalorieGame {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session();
        let phase = session.phase();
        let (status_text, status_color) = phase.label();
        let is_focused = self.focus_handle(cx).is_focused(window);

        let current_footer = match session.current() {
            Some(candidate) => calorie_text(candidate).into_any_element(),
            None => skeleton(px(272.), px(20.)).into_any_element(),
        };

        let challenger_footer = match (phase, session.challenger()) {
            (Phase::Revealing, Some(candidate)) => calorie_pill(candidate, 0x16a34a),
            (Phase::Lost, Some(candidate)) => calorie_pill(candidate, 0xdc2626),
            (Phase::Guessing, Some(_)) => div()
                .flex()
                .gap_10()
                .child(guess_button("guess-lower", "LOWER", 0xdc2626).on_click(
                    cx.listener(|this, _, _, cx| this.handle_guess(Guess::Lower, cx)),
                ))
                .child(guess_button("guess-higher", "HIGHER", 0x16a34a).on_click(
                    cx.listener(|this, _, _, cx| this.handle_guess(Guess::Higher, cx)),
                ))
                .into_any_element(),
            _ => skeleton(px(272.), px(20.)).into_any_element(),
        };

        let board = div()
            .relative()
            .flex()
            .gap_5()
            .child(candidate_card(session.current(), current_footer))
            .child(candidate_card(session.challenger(), challenger_footer))
            .when(phase == Phase::Lost, |this| {
                this.child(
                    div()
                        .absolute()
                        .top(px(0.))
                        .bottom(px(0.))
                        .left(px(0.))
                        .right(px(0.))
                        .rounded_2xl()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .items_center()
                        .justify_center()
                        .bg(rgba(0x210c1bcc))
                        .child(
                            div()
                                .text_3xl()
                                .font_weight(FontWeight::EXTRA_BOLD)
                                .child("GAME OVER"),
                        )
                        .child(div().text_xl().child(format!("Score: {}", session.score())))
                        .child(
                            div()
                                .text_xl()
                                .text_color(rgb(0xa5f3fc))
                                .child(format!("High score: {}", session.high_score())),
                        )
                        .child(
                            div()
                                .id("restart")
                                .px_6()
                                .py_2()
                                .rounded_full()
                                .border_1()
                                .border_color(rgb(0xf8fafc))
                                .font_weight(FontWeight::BOLD)
                                .cursor_pointer()
                                .hover(|style| style.opacity(0.5))
                                .on_click(cx.listener(|this, _, _, cx| this.handle_restart(cx)))
                                .child("RESTART"),
                        ),
                )
            });

        let instructions = [
            "Up / W / H: higher",
            "Down / S / L: lower",
            "Enter / R: restart",
            "Esc: quit",
        ];

        div()
            .bg(rgb(0x210c1b))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .items_center()
            .track_focus(&self.focus_handle(cx))
            .key_context("calorie-duel")
            .on_action(cx.listener(|this, _: &GuessHigher, _, cx| {
                this.handle_guess(Guess::Higher, cx)
            }))
            .on_action(cx.listener(|this, _: &GuessLower, _, cx| {
                this.handle_guess(Guess::Lower, cx)
            }))
            .on_action(cx.listener(|this, _: &RestartGame, _, cx| this.handle_restart(cx)))
            .child(
                div()
                    .text_3xl()
                    .font_weight(FontWeight::EXTRA_BOLD)
                    .child("CAL HIGHER LOWER"),
            )
            .child(board)
            .child(
                div()
                    .w(px(CARD_WIDTH * 2. + 20.))
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(score_pill("SCORE", session.score(), false))
                    .child(
                        div()
                            .text_lg()
                            .text_color(rgb(status_color))
                            .child(status_text),
                    )
                    .child(score_pill("HIGH SCORE", session.high_score(), true)),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x362432))
                            .child(text)
                    }))
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .text_color(rgb(0x94a3b8))
                            .child(if is_focused {
                                "Focused"
                            } else {
                                "Click inside the window to take control"
                            }),
                    ),
            )
    }
}

fn candidate_card(candidate: Option<&Candidate>, footer: AnyElement) -> Div {
    let picture = match picture_url(candidate) {
        Some(url) => img(url)
            .size(px(PICTURE_SIZE))
            .rounded_md()
            .with_loading(|| picture_skeleton().into_any_element())
            .with_fallback(|| picture_skeleton().into_any_element())
            .into_any_element(),
        None => picture_skeleton().into_any_element(),
    };
    let name = match candidate {
        Some(candidate) => div()
            .text_xl()
            .px_4()
            .child(candidate.name.clone())
            .into_any_element(),
        None => skeleton(px(272.), px(20.)).into_any_element(),
    };

    div()
        .w(px(CARD_WIDTH))
        .h(px(560.))
        .p_5()
        .rounded_2xl()
        .bg(rgb(0x2b1827))
        .flex()
        .flex_col()
        .gap_5()
        .child(
            div()
                .h(px(340.))
                .rounded_lg()
                .bg(rgb(0x362432))
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_6()
                .child(picture)
                .child(name),
        )
        .child(
            div()
                .flex()
                .flex_1()
                .items_center()
                .justify_center()
                .child(footer),
        )
}

fn calorie_text(candidate: &Candidate) -> Div {
    div()
        .text_3xl()
        .font_weight(FontWeight::EXTRA_BOLD)
        .child(format!("{} CAL", candidate.calories))
}

fn calorie_pill(candidate: &Candidate, color: u32) -> AnyElement {
    div()
        .px_12()
        .py_4()
        .rounded_full()
        .border_1()
        .border_color(rgb(color))
        .text_3xl()
        .font_weight(FontWeight::BOLD)
        .child(format!("{} CAL", candidate.calories))
        .into_any_element()
}

fn guess_button(id: &'static str, label: &'static str, color: u32) -> gpui::Stateful<Div> {
    div()
        .id(id)
        .size(px(96.))
        .rounded_full()
        .border_1()
        .border_color(rgb(color))
        .text_color(rgb(color))
        .font_weight(FontWeight::BOLD)
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .hover(|style| style.opacity(0.5))
        .child(label)
}

fn score_pill(label: &'static str, value: u32, label_first: bool) -> Div {
    let caption = div().text_sm().child(label);
    let value = div()
        .px_3()
        .py_1()
        .rounded_full()
        .bg(rgb(0x362431))
        .child(value.to_string());

    let row = div().flex().items_center().gap_5();
    if label_first {
        row.child(caption).child(value)
    } else {
        row.child(value).child(caption)
    }
}

/// Only remote pictures are loaded; anything else keeps the skeleton.
fn picture_url(candidate: Option<&Candidate>) -> Option<String> {
    let url = candidate?.image_url.trim();
    (url.starts_with("https://") || url.starts_with("http://")).then(|| url.to_owned())
}

fn picture_skeleton() -> Div {
    skeleton(px(PICTURE_SIZE), px(PICTURE_SIZE))
}

fn skeleton(width: Pixels, height: Pixels) -> Div {
    div().w(width).h(height).rounded_md().bg(rgb(0x4a3644))
}
