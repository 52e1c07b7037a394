//! The turtle-graphics back end.
//!
//! Turtle graphics is out of scope as an "external
//! collaborator" (§1) but still names its exact method surface (§4.6), so
//! this crate still needs a concrete collaborator to compile and run
//! end-to-end. [`TurtleBackend`] is that seam: one method per primitive
//! named by the turtle-graphics surface. [`LoggingTurtleBackend`] is the default
//! implementation — it keeps an in-memory pose for `setpos`/`seth`
//! bookkeeping and journals every call through the `log` facade at
//! `info`, so a headless run (the test harness, CI) still observes turtle
//! activity without a display. Behind the `turtle-graphics` feature,
//! [`RealTurtleBackend`] forwards to the `turtle` crate, the closest
//! ecosystem analogue of Python's `turtle` module that §4.6 was written
//! against.

use std::fmt;

/// The turtle-graphics primitive surface.
pub trait TurtleBackend: fmt::Debug {
    /// `forward`/`fd`.
    fn forward(&mut self, distance: f64);
    /// `backward`/`back`/`bk`.
    fn backward(&mut self, distance: f64);
    /// `right`/`rt`.
    fn right(&mut self, degrees: f64);
    /// `left`/`lt` (note: this alias is shadowed at the Logo level — see
    /// the registration-order Design Note in `DESIGN.md`).
    fn left(&mut self, degrees: f64);
    /// `circle`.
    fn circle(&mut self, radius: f64);
    /// `setpos`/`setposition`/`goto`.
    fn setpos(&mut self, x: f64, y: f64);
    /// `seth`/`setheading`.
    fn seth(&mut self, heading: f64);
    /// `penup`/`pu`.
    fn penup(&mut self);
    /// `pendown`/`pd`.
    fn pendown(&mut self);
    /// `showturtle`/`st`.
    fn showturtle(&mut self);
    /// `hideturtle`/`ht`.
    fn hideturtle(&mut self);
    /// `clear`.
    fn clear(&mut self);
    /// `color`.
    fn color(&mut self, name: &str);
    /// `begin_fill`.
    fn begin_fill(&mut self);
    /// `end_fill`.
    fn end_fill(&mut self);
    /// `exitonclick`.
    fn exitonclick(&mut self);
    /// `speed`.
    fn speed(&mut self, n: f64);
}

/// A turtle pose: position and heading in degrees, `0` pointing along the
/// positive x-axis, matching Python `turtle`'s convention.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    x: f64,
    y: f64,
    heading: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Pose { x: 0.0, y: 0.0, heading: 0.0 }
    }
}

/// The default turtle backend: no drawing surface, just bookkeeping and
/// a `log::info!` journal of every call. Used by the CLI when the
/// `turtle-graphics` feature isn't compiled in (or isn't requested) and
/// unconditionally by tests.
#[derive(Debug, Default)]
pub struct LoggingTurtleBackend {
    pose: Pose,
    pen_down: bool,
    visible: bool,
}

impl LoggingTurtleBackend {
    /// Create a fresh turtle at the origin, pen down, visible — matching
    /// Python `turtle`'s default state.
    pub fn new() -> Self {
        Self { pose: Pose::default(), pen_down: true, visible: true }
    }

    /// The turtle's current `(x, y)` position, for tests.
    pub fn position(&self) -> (f64, f64) {
        (self.pose.x, self.pose.y)
    }

    /// The turtle's current heading in degrees, for tests.
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    fn step(&mut self, distance: f64) {
        let radians = self.pose.heading.to_radians();
        self.pose.x += distance * radians.cos();
        self.pose.y += distance * radians.sin();
    }
}

impl TurtleBackend for LoggingTurtleBackend {
    fn forward(&mut self, distance: f64) {
        self.step(distance);
        log::info!("forward {distance} -> ({:.2}, {:.2})", self.pose.x, self.pose.y);
    }

    fn backward(&mut self, distance: f64) {
        self.step(-distance);
        log::info!("backward {distance} -> ({:.2}, {:.2})", self.pose.x, self.pose.y);
    }

    fn right(&mut self, degrees: f64) {
        self.pose.heading -= degrees;
        log::info!("right {degrees} -> heading {:.2}", self.pose.heading);
    }

    fn left(&mut self, degrees: f64) {
        self.pose.heading += degrees;
        log::info!("left {degrees} -> heading {:.2}", self.pose.heading);
    }

    fn circle(&mut self, radius: f64) {
        log::info!("circle {radius}");
    }

    fn setpos(&mut self, x: f64, y: f64) {
        self.pose.x = x;
        self.pose.y = y;
        log::info!("setpos ({x:.2}, {y:.2})");
    }

    fn seth(&mut self, heading: f64) {
        self.pose.heading = heading;
        log::info!("seth {heading:.2}");
    }

    fn penup(&mut self) {
        self.pen_down = false;
        log::info!("penup");
    }

    fn pendown(&mut self) {
        self.pen_down = true;
        log::info!("pendown");
    }

    fn showturtle(&mut self) {
        self.visible = true;
        log::info!("showturtle");
    }

    fn hideturtle(&mut self) {
        self.visible = false;
        log::info!("hideturtle");
    }

    fn clear(&mut self) {
        log::info!("clear");
    }

    fn color(&mut self, name: &str) {
        log::info!("color {name}");
    }

    fn begin_fill(&mut self) {
        log::info!("begin_fill");
    }

    fn end_fill(&mut self) {
        log::info!("end_fill");
    }

    fn exitonclick(&mut self) {
        log::info!("exitonclick");
    }

    fn speed(&mut self, n: f64) {
        log::info!("speed {n}");
    }
}

/// The real drawing backend, built on the `turtle` crate. Only compiled
/// in behind the `turtle-graphics` feature; without it the interpreter
/// still implements every turtle primitive, it just journals
/// instead of drawing.
#[cfg(feature = "turtle-graphics")]
pub mod real {
    use super::TurtleBackend;

    /// A [`TurtleBackend`] that drives an actual `turtle::Turtle` window.
    pub struct RealTurtleBackend {
        turtle: turtle::Turtle,
    }

    impl std::fmt::Debug for RealTurtleBackend {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("RealTurtleBackend").finish()
        }
    }

    impl Default for RealTurtleBackend {
        fn default() -> Self {
            Self { turtle: turtle::Turtle::new() }
        }
    }

    impl TurtleBackend for RealTurtleBackend {
        fn forward(&mut self, distance: f64) {
            self.turtle.forward(distance);
        }

        fn backward(&mut self, distance: f64) {
            self.turtle.backward(distance);
        }

        fn right(&mut self, degrees: f64) {
            self.turtle.right(degrees);
        }

        fn left(&mut self, degrees: f64) {
            self.turtle.left(degrees);
        }

        fn circle(&mut self, radius: f64) {
            // The `turtle` crate has no native circle primitive; approximate
            // one as a regular 36-gon, matching Python `turtle.circle`'s
            // polygon-approximation behavior closely enough for this
            // interpreter's purposes.
            const STEPS: u32 = 36;
            let step_length = 2.0 * std::f64::consts::PI * radius / f64::from(STEPS);
            let step_angle = 360.0 / f64::from(STEPS);
            for _ in 0..STEPS {
                self.turtle.forward(step_length);
                self.turtle.left(step_angle);
            }
        }

        fn setpos(&mut self, x: f64, y: f64) {
            self.turtle.go_to([x, y]);
        }

        fn seth(&mut self, heading: f64) {
            self.turtle.set_heading(heading);
        }

        fn penup(&mut self) {
            self.turtle.pen_up();
        }

        fn pendown(&mut self) {
            self.turtle.pen_down();
        }

        fn showturtle(&mut self) {
            self.turtle.show();
        }

        fn hideturtle(&mut self) {
            self.turtle.hide();
        }

        fn clear(&mut self) {
            self.turtle.clear();
        }

        fn color(&mut self, name: &str) {
            self.turtle.set_pen_color(name);
        }

        fn begin_fill(&mut self) {
            self.turtle.begin_fill();
        }

        fn end_fill(&mut self) {
            self.turtle.end_fill();
        }

        fn exitonclick(&mut self) {
            self.turtle.wait_for_click();
        }

        fn speed(&mut self, n: f64) {
            self.turtle.set_speed(n as i32);
        }
    }
}
