use epicycles::prelude::*;
use epicycles_common::{all_close, periodic_grid};

use std::f64::consts::PI;

const PERIOD: f64 = 6.0;
const SIZE: usize = 60;

/// Series of a single coordinate $2a\cos(2\pi t / P + \varphi)$ aligned to its own value at zero
fn harmonic(amplitude: f64, phase: f64) -> FourierSeries<f64> {
    let t_vals = periodic_grid(0.0, PERIOD, SIZE);
    let values: Vec<_> = t_vals
        .iter()
        .map(|t| 2.0 * amplitude * (2.0 * PI * t / PERIOD + phase).cos())
        .collect();
    let origin_offset = values[0];
    FourierSeries::new(
        PERIOD,
        vec![amplitude, 0.0, 0.0],
        vec![phase, 0.0, 0.0],
        t_vals,
        values.clone(),
        values,
        origin_offset,
    )
    .unwrap()
}

#[test]
fn ellipse_terminals_follow_approximation() {
    let x_series = harmonic(1.5, 0.0);
    let y_series = harmonic(0.5, -0.5 * PI);

    let mut x_config = CirclesConfig::new(3);
    x_config.set_origin(Point::new(0.0, 200.0));
    let mut y_config = CirclesConfig::new(3);
    y_config.set_origin(Point::new(0.0, 300.0));
    let mut x_circles = Circles::from_config(&x_series, &x_config).unwrap();
    let mut y_circles = Circles::from_config(&y_series, &y_config).unwrap();

    let mut frames = 0;
    loop {
        let x_positions = x_circles.circle_positions(false);
        let y_positions = y_circles.circle_positions(true);
        all_close(
            &[x_positions.terminal_x, y_positions.terminal_y],
            &[x_circles.approx_value(), y_circles.approx_value()],
            1e-9,
        );
        // Chains are drawn at their origins' second coordinate
        assert_eq!(200.0, x_positions.centers_y[0]);
        assert_eq!(-300.0, y_positions.centers_x[0]);
        frames += 1;
        match (x_circles.step(4), y_circles.step(4)) {
            (Ok(x_index), Ok(y_index)) => assert_eq!(x_index, y_index),
            (Err(x_err), Err(y_err)) => {
                assert_eq!(x_err, y_err);
                break;
            }
            other => panic!("axes went out of sync: {:?}", other),
        }
    }
    assert_eq!(15, frames);
    assert_eq!(56, x_circles.time_index_cursor());
    assert_eq!(frames, y_circles.trace_history().len());
}

#[test]
fn trace_closes_the_curve() {
    let series = harmonic(1.0, 0.3);
    let mut circles = Circles::new(&series, 3).unwrap();
    let trace_x: Vec<_> = circles.frames(1, false).map(|p| p.terminal_x).collect();
    assert_eq!(SIZE, trace_x.len());
    all_close(&trace_x, series.fourier_approximation(), 1e-9);
    let history: Vec<_> = circles.trace_history().iter().map(|p| p.x).collect();
    assert_eq!(trace_x, history);
}

#[test]
fn dynamic_source() {
    let series = harmonic(1.0, 0.0);
    let source: &dyn FourierSource<f64> = &series;
    let mut circles = Circles::new(source, 2).unwrap();
    assert_eq!(Ok(1), circles.step(1));
    assert_eq!(2, circles.circle_positions(false).radii.len());
}

#[test]
fn configuration_error_message() {
    let series = harmonic(1.0, 0.0);
    let err = Circles::new(&series, 4).err().unwrap();
    assert_eq!(
        "requested 4 circles, but the Fourier series has only 3 harmonics",
        err.to_string()
    );
}
