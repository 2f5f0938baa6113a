use fandial::config;
use fandial::gui::app::AppModel;
use fandial::gui::dial::State;
use fandial::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let state = State::from_config(&config);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.fandial.Fandial");

    app.run::<AppModel>((state, rx));
}
