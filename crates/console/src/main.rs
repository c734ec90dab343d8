use panchayat_console::{telemetry, App};

fn main() {
    telemetry::init();
    yew::Renderer::<App>::new().render();
}
