//! passgen — a desktop password generator with a web UI and a strength meter.
//!
//! Entry point: opens the generator window. When built without the `gui`
//! feature, walks through a generator session on the console instead.

use passgen::app::App;
use passgen::services::clipboard;

#[cfg(feature = "gui")]
fn main() {
    let app = App::bootstrap(clipboard::default_sink());
    if let Err(e) = passgen::ui::webview_app::run(app) {
        tracing::error!(error = %e, "failed to start the generator window");
        eprintln!("passgen: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use passgen::managers::generator_controller::GeneratorControllerTrait;
    use passgen::types::generator::{CharacterClass, PasswordLength, Transition};

    let mut app = App::bootstrap(clipboard::default_sink());
    let controller = &mut app.controller;

    println!("Password Generator v{} (console mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let steps = [
        Transition::Generate,
        Transition::Toggle(CharacterClass::Uppercase),
        Transition::Toggle(CharacterClass::Lowercase),
        Transition::Toggle(CharacterClass::Numbers),
        Transition::Toggle(CharacterClass::Symbols),
        Transition::SetLength(PasswordLength::new(16).unwrap_or_default()),
        Transition::Generate,
        Transition::Copy,
    ];

    for step in steps {
        match controller.apply(step) {
            Ok(outcome) => println!("  {:<28} -> {:?}", format!("{:?}", step), outcome),
            Err(e) => {
                eprintln!("  {:?} failed: {}", step, e);
                std::process::exit(1);
            }
        }
    }

    let view = controller.view();
    let bars: String = view
        .bars
        .iter()
        .map(|bar| if bar.is_some() { '█' } else { '░' })
        .collect();
    println!();
    println!("  Password : {}", view.password.as_str());
    println!("  Strength : {} {}", bars, view.strength_label.unwrap_or(""));
    println!("  Copied   : {}", view.is_copied);
}
