//! ANSI terminal rendering for systems, bodies and surfaces.
//!
//! Everything returns a `String` so the CLI decides where it goes.

use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use orbits::{BodyPosition, OrbitTrace};
use planetary::{Anomalies, CompositionClass, PlanetaryBody, Surface};
use star_system::{BodyKind, CelestialBody, StarSystem, Universe};

pub const RESET: ResetColor = ResetColor;
pub const BOLD: SetAttribute = SetAttribute(Attribute::Bold);

const STAR_ICON: u8 = 226;
const PLANET_ICON: u8 = 209;
const MOON_ICON: u8 = 47;
const SHIP_ICON: u8 = 199;
const NAME: u8 = 221;
const LABEL: u8 = 244;
const VALUE: u8 = 39;
const HEADER: u8 = 51;
const TITLE: u8 = 10;

/// Foreground command for an ANSI 256-color palette entry.
pub fn fg(code: u8) -> SetForegroundColor {
    SetForegroundColor(Color::AnsiValue(code))
}

fn bg(code: u8) -> SetBackgroundColor {
    SetBackgroundColor(Color::AnsiValue(code))
}

fn class_color(class: CompositionClass) -> u8 {
    match class {
        CompositionClass::Rock => 220,
        CompositionClass::Metal => 250,
        CompositionClass::Gas => 81,
        CompositionClass::Ice => 111,
        CompositionClass::Moon => MOON_ICON,
    }
}

// ============================================================================
// System tree
// ============================================================================

/// The whole body tree, one line per body, with box-drawing connectors.
pub fn system_tree(system: &StarSystem) -> String {
    let mut out = format!("{BOLD}{} ¤ Star System: {}{RESET}\n", fg(TITLE), system.name);
    write_body(&mut out, &system.star, true, &mut Vec::new());
    out
}

fn write_body(out: &mut String, body: &CelestialBody, is_last: bool, ancestors: &mut Vec<bool>) {
    for ancestor_last in ancestors.iter() {
        out.push_str(if *ancestor_last { "     " } else { " │   " });
    }
    out.push_str(if is_last { " └──>" } else { " ├──>" });
    out.push_str(&body_line(body));
    out.push('\n');

    ancestors.push(is_last);
    let last = body.bound.len().saturating_sub(1);
    for (i, child) in body.bound.iter().enumerate() {
        write_body(out, child, i == last, ancestors);
    }
    ancestors.pop();
}

/// A single tree line for `body`, without connectors.
pub fn body_line(body: &CelestialBody) -> String {
    match &body.kind {
        BodyKind::Star(star) => format!(
            "{BOLD}{} * {}{}{RESET} {}(Spectral Class:{RESET} {}{}{RESET}{}){RESET} Perceived color : {}",
            fg(STAR_ICON),
            fg(NAME),
            body.name,
            fg(LABEL),
            fg(VALUE),
            star.spectral_type,
            fg(LABEL),
            star.color.paint("███"),
        ),
        BodyKind::Planet(planetary) => planetary_line(body, planetary, PLANET_ICON, "⬤"),
        BodyKind::Moon(planetary) => planetary_line(body, planetary, MOON_ICON, "•"),
        BodyKind::Ship(ship) => format!(
            "{BOLD}{} ➤ {}{}{RESET}   {} {}{RESET}    {} {}{RESET}",
            fg(SHIP_ICON),
            fg(NAME),
            body.name,
            fg(ship.owner_color),
            ship.owner,
            fg(LABEL),
            ship.class_label,
        ),
    }
}

fn planetary_line(body: &CelestialBody, planetary: &PlanetaryBody, icon: u8, symbol: &str) -> String {
    let attrs = &planetary.attributes;
    format!(
        "{BOLD}{} {symbol} {BOLD}{}{}{RESET} {}{}{RESET}   \t{}Orbit:{RESET} {}{:.3} au{RESET} \t{}Radius:{RESET} {}{} R⊕{RESET}    \t{}Density:{RESET} {}{} g/cm³{RESET}",
        fg(icon),
        fg(NAME),
        body.name,
        fg(class_color(planetary.class)),
        planetary.class,
        fg(LABEL),
        fg(VALUE),
        body.orbit_radius.to_au(),
        fg(LABEL),
        fg(VALUE),
        attrs.radius,
        fg(LABEL),
        fg(VALUE),
        attrs.density,
    )
}

// ============================================================================
// Body card
// ============================================================================

/// Every derived attribute of a planet or moon. `None` for stars and ships.
pub fn body_card(body: &CelestialBody) -> Option<String> {
    let planetary = body.planetary()?;
    let attrs = &planetary.attributes;
    let is_moon = matches!(body.kind, BodyKind::Moon(_));
    let period = if is_moon {
        format!("{:.3} days", attrs.orbital_period.to_days())
    } else {
        format!("{:.3} Earth years", attrs.orbital_period.to_years())
    };

    let rows = [
        ("Type", planetary.class.to_string()),
        ("Orbit Radius", format!("{:.3} AU", body.orbit_radius.to_au())),
        ("Temperature", format!("{} K", attrs.temperature.to_kelvin())),
        ("Mass", format!("{} Earth masses", attrs.mass)),
        ("Radius", format!("{} Earth radii", attrs.radius)),
        ("Density", format!("{} g/cm³", attrs.density)),
        ("Surface Gravity", format!("{} g", attrs.surface_gravity)),
        ("Escape Velocity", format!("{} × Earth's", attrs.escape_velocity)),
        ("Rotation Period", format!("{} hours", attrs.rotation_period)),
        ("Orbital Period", period),
        ("Core Composition", attrs.core_composition.clone()),
        ("Atmosphere", attrs.atmosphere.clone()),
    ];

    let mut out = format!(
        "{BOLD}{}======== {}{} ({}) {}========{RESET}\n",
        fg(HEADER),
        fg(NAME),
        body.name,
        body.kind.label(),
        fg(HEADER),
    );
    for (label, value) in rows {
        out.push_str(&format!("{BOLD}{}{label}:{RESET} {}{value}{RESET}\n", fg(HEADER), fg(NAME)));
    }
    Some(out)
}

// ============================================================================
// Surface
// ============================================================================

/// Two heightmap rows per terminal line using upper half blocks.
pub fn heightmap(surface: &Surface) -> String {
    let map = &surface.heightmap;
    let (rows, cols) = map.shape();
    let mut out = String::new();

    for row in (0..rows).step_by(2) {
        for col in 0..cols {
            let top = surface.palette.color_for(map[(row, col)]);
            let bottom = if row + 1 < rows {
                surface.palette.color_for(map[(row + 1, col)])
            } else {
                top
            };
            out.push_str(&format!("{}{}▀", bg(bottom), fg(top)));
        }
        out.push_str(&RESET.to_string());
        out.push('\n');
    }
    out
}

pub fn anomalies(anomalies: &Anomalies) -> String {
    let sections = [
        ("Atmospheric", &anomalies.atmospheric),
        ("Terrain", &anomalies.terrain),
        ("Underground", &anomalies.underground),
    ];
    let mut out = String::new();
    for (title, entries) in sections {
        out.push_str(&format!("\n{BOLD}{}== {title} Anomalies =={RESET}\n", fg(HEADER)));
        for entry in entries {
            out.push_str(&format!("  {}- {entry}{RESET}\n", fg(NAME)));
        }
    }
    out
}

/// Full scanner read-out: header, heightmap and anomaly lists.
pub fn scan_report(body: &CelestialBody, surface: &Surface) -> String {
    let mut out = format!(
        "\n{BOLD}{} ======================= Terrain  Scanner ====================={RESET}\n",
        fg(HEADER)
    );
    out.push_str(&format!(
        "{}{}{RESET}  seed {} · {:?} kernel · {:?} palette\n",
        fg(NAME),
        body.name,
        surface.seed,
        surface.kernel,
        surface.palette
    ));
    out.push_str(&heightmap(surface));
    out.push_str(&anomalies(&surface.anomalies));
    out
}

// ============================================================================
// Universe and kinematics
// ============================================================================

pub fn universe_summary(universe: &Universe) -> String {
    let mut out = format!("{BOLD}{} ¤ Universe: {} systems{RESET}\n", fg(TITLE), universe.len());
    for system in universe.systems() {
        let spectral = match &system.star.kind {
            BodyKind::Star(star) => star.color.paint(&star.spectral_type.to_string()),
            _ => "?".to_string(),
        };
        out.push_str(&format!(
            " {}{}{RESET}  {}  {}{} planets{RESET}  {}({:.3}, {:.3}, {:.3}){RESET}\n",
            fg(NAME),
            system.name,
            spectral,
            fg(VALUE),
            system.planet_count(),
            fg(LABEL),
            system.position.x,
            system.position.y,
            system.position.z,
        ));
    }
    out
}

/// Absolute positions, indented by depth in the orbit tree.
pub fn positions(age: f64, positions: &[BodyPosition]) -> String {
    let mut out = format!("{BOLD}positions at age {:.3}{RESET}\n", age);
    for entry in positions {
        out.push_str(&format!(
            "{:indent$}{}{}{RESET}  {}({:+.6}, {:+.6}, {:+.6}){RESET}\n",
            "",
            fg(NAME),
            entry.name,
            fg(VALUE),
            entry.position.x,
            entry.position.y,
            entry.position.z,
            indent = entry.depth * 2,
        ));
    }
    out
}

/// Per-body orbit extent: sample count and farthest point from the center.
pub fn traces(traces: &[OrbitTrace]) -> String {
    let mut out = String::new();
    for trace in traces {
        let reach = trace
            .points
            .iter()
            .map(|p| (p - trace.center).norm())
            .fold(0.0_f64, f64::max);
        out.push_str(&format!(
            " {}{}{RESET}  {}{} samples, apoapsis {:.6}{RESET}\n",
            fg(NAME),
            trace.name,
            fg(LABEL),
            trace.points.len(),
            reach,
        ));
    }
    out
}
