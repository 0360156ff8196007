// File: crates/chartkit-core/src/grid.rs
// Summary: Evenly spaced value helpers shared by ring and grid layout.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| if i + 1 == steps { end } else { start + step * i as f64 }).collect()
}
