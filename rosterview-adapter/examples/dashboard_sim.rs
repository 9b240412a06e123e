// Example: drive a session the way a dashboard would (typing, wheel, timers, loading).
use rosterview::{Choice, ViewportOptions};
use rosterview_adapter::{
    InputEvent, LoadError, LoadRequest, MockRoster, Session, SessionOptions, TextSurface,
    sample_annotations,
};

fn main() {
    let mut session = Session::new(
        SessionOptions::default().with_viewport(ViewportOptions::new(40, 5)),
    );
    let mut source = MockRoster::new(999, 2024);
    session.load(&mut source, &LoadRequest::All, 0);
    println!("loaded {} developers", session.view().filtered_len());

    // Keystrokes 60ms apart: one recompute after the user pauses.
    let mut now_ms = 0u64;
    for pattern in ["d", "de", "dev", "developer 1"] {
        now_ms += 60;
        session.handle(InputEvent::NamePatternChanged(pattern.into()), now_ms);
        session.tick(now_ms);
    }
    session.handle(InputEvent::DomainChanged(Choice::only("Ajax")), now_ms);
    while !session.tick(now_ms) {
        now_ms += 16;
    }
    println!(
        "t={now_ms}ms recomputes={} filtered={}",
        session.recompute_count(),
        session.view().filtered_len()
    );

    session.handle(InputEvent::PointerEntered, now_ms);
    session.wheel(120, now_ms);

    let mut surface = TextSurface::new();
    session.render(&mut surface);
    print!("{}", surface.as_str());

    // A failing refresh leaves the table alone.
    let ticket = session.begin_load(now_ms);
    session.finish_load(ticket, Err(LoadError::rejected("offline")));
    println!(
        "after failed refresh: error={:?} filtered={}",
        session.last_error(),
        session.view().filtered_len()
    );

    session.annotations_mut().extend(sample_annotations());
    println!("prediction for Developer 1: {:?}", session.predict("Developer 1"));
}
