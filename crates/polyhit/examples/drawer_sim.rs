//! Windowless replay of the interactive polygon-drawer flow.
//!
//! Usage:
//!   cargo run -p polyhit --example drawer_sim
//!
//! "Draws" an outer square with an inner hole the way mouse input would
//! (append per vertex, close per contour, rebuild on release), then sweeps
//! a cursor grid and prints the containment picture: `#` where the fill
//! would turn red, `.` where it stays black.

use polyhit::prelude::*;

fn main() {
    let mut tester = HitTester::new();
    for &(x, y) in &[(1.0, 1.0), (11.0, 1.0), (11.0, 11.0), (1.0, 11.0)] {
        tester.append_vertex(x, y);
    }
    tester.close_contour();
    for &(x, y) in &[(4.0, 4.0), (8.0, 4.0), (8.0, 8.0), (4.0, 8.0)] {
        tester.append_vertex(x, y);
    }
    tester.close_contour();

    let index = tester.rebuild();
    let mut scratch = vec![0.0; index.required_scratch_size()];
    for row in 0..13 {
        let y = row as f64;
        let mut line = String::with_capacity(13);
        for col in 0..13 {
            let x = col as f64;
            let inside = index.contains(Vec2::new(x, y), &mut scratch).unwrap_or(false);
            line.push(if inside { '#' } else { '.' });
        }
        println!("{line}");
    }
}
