mod app_builder;
mod reveal_observer;
mod svg_view;
mod viewport;
mod yew_app;

fn main() {
    app_builder::run();
}
