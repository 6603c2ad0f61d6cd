//! The tower: two concentric squares plus a pair of orbiting satellites.

use orrery_tower::{Animation, Orbit, ShapeRecord};

const SATELLITE_ORBIT: f32 = 35.0;
const SATELLITE_SPEED: f64 = 2.0;

pub fn records() -> Vec<ShapeRecord> {
    vec![
        ShapeRecord::new("rect", 0.0, 0.0)
            .size(50.0, 50.0)
            .rotation(0.0)
            .colour("blue")
            .line_width(2.0)
            .animation(Animation::rotate(0.0)),
        ShapeRecord::new("rect", 0.0, 0.0)
            .size(30.0, 30.0)
            .rotation(45.0)
            .radii([5.0])
            .colour("green")
            .line_width(3.0)
            .animation(Animation::rotate(-1.0)),
        satellite(0.0),
        satellite(180.0),
    ]
}

fn satellite(start: f64) -> ShapeRecord {
    ShapeRecord::new("rect", 0.0, 0.0)
        .size(10.0, 10.0)
        .radii([2.0])
        .colour("crimson")
        .line_width(2.0)
        .animation(
            Animation::rotate(3.0).with_orbit(Orbit::new(start, SATELLITE_ORBIT, SATELLITE_SPEED)),
        )
}
