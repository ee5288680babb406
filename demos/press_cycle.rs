//! Headless run of a tap and a long press against a simulated 60fps clock.
//!
//! Run with `RUST_LOG=debug` to see every stage change and timer.

use dotpress::prelude::*;

const FRAME_MS: u64 = 16;

fn print_frame(now: u64, dots: &StageSequencer) {
    let dot = |id: ElementId| {
        let t = dots.element(id).transform;
        format!(
            "{:>6.2},{:>6.2} x{:.2}",
            t.translate.0, t.translate.1, t.scale.0
        )
    };
    println!(
        "{:>5}ms {:<15} red[{}] blue[{}] home x{:.2} dots {}",
        now,
        format!("{:?}", dots.stage()),
        dot(ElementId::Red),
        dot(ElementId::Blue),
        dots.element(ElementId::Home).transform.scale.0,
        if dots.elements().dots_visible() { "shown" } else { "hidden" },
    );
}

/// Advance frame by frame until `until`, printing every third frame
fn play(dots: &mut StageSequencer, from: u64, until: u64) {
    let mut now = from;
    let mut frame = 0;
    while now <= until {
        dots.advance(now);
        if frame % 3 == 0 {
            print_frame(now, dots);
        }
        now += FRAME_MS;
        frame += 1;
    }
}

fn main() -> dotpress::Result<()> {
    env_logger::init();

    let table = OffsetTable::default().with_density(2.0);
    let mut dots = StageSequencer::new(DotsConfig::default(), &table)?;

    println!("-- tap --");
    dots.on_press_start(0);
    dots.on_press_end(40);
    play(&mut dots, 0, 480);

    println!("-- long press --");
    dots.on_press_start(1000);
    play(&mut dots, 1000, 1480);
    dots.on_press_end(1480);
    play(&mut dots, 1480, 1800);

    println!("-- next press brings the dots back --");
    dots.on_press_start(2000);
    dots.on_press_end(2010);
    play(&mut dots, 2000, 2500);

    Ok(())
}
