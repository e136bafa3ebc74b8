//! The demonstration driver
//!
//! Each step builds or mutates values and records what it saw as an
//! [`Observation`]. Rendering the observations in order gives the transcript.

use std::fmt;
use std::io::Write;

use tracing::{debug, info_span, trace};

use crate::context::ScriptConfig;
use crate::error::Result;
use crate::value::{Dimensions, Float, Identity, VideoMode};

/// The playground section an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Reading and writing fields
    AccessingProperties,
    /// Building a value from explicit field values
    MemberwiseInitializers,
    /// Copy on assignment
    ValueTypes,
    /// Share on assignment
    ReferenceTypes,
    /// Same instance vs. equal instance
    IdentityOperators,
    /// The final line
    Closing,
}

impl Section {
    /// Human-readable heading, `None` for the untitled closing line
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::AccessingProperties => Some("Accessing Properties"),
            Section::MemberwiseInitializers => Some("Memberwise Initializers for Structure Types"),
            Section::ValueTypes => Some("Structures and Enumerations Are Value Types"),
            Section::ReferenceTypes => Some("Classes Are Reference Types"),
            Section::IdentityOperators => Some("Identity Operators"),
            Section::Closing => None,
        }
    }
}

/// One line of the transcript, with the values it reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Width of a default-built `Dimensions`
    ResolutionWidth(i64),
    /// Width of a default-built `VideoMode` after setting it through the handle
    VideoModeWidth(i64),
    /// Width of a memberwise-built `Dimensions`
    VgaWidth(i64),
    /// The mutated copy
    CinemaSize(Dimensions),
    /// The original the copy was taken from
    HdStill(Dimensions),
    /// Frame rate read through the first of two shared handles
    FrameRate(f64),
    /// Both handles denote the same instance
    SameInstance,
    /// Unconditional last line
    Closing,
}

impl Observation {
    /// Section this observation is printed under
    pub fn section(&self) -> Section {
        match self {
            Observation::ResolutionWidth(_) | Observation::VideoModeWidth(_) => {
                Section::AccessingProperties
            }
            Observation::VgaWidth(_) => Section::MemberwiseInitializers,
            Observation::CinemaSize(_) | Observation::HdStill(_) => Section::ValueTypes,
            Observation::FrameRate(_) => Section::ReferenceTypes,
            Observation::SameInstance => Section::IdentityOperators,
            Observation::Closing => Section::Closing,
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::ResolutionWidth(w) => {
                write!(f, "The width of someResolution is {}", w)
            }
            Observation::VideoModeWidth(w) => write!(f, "The width of someVideoMode is {}", w),
            Observation::VgaWidth(w) => write!(f, "width of vga is {}", w),
            Observation::CinemaSize(d) => write!(
                f,
                "cinema has {} pixels wide and {} pixels high",
                d.width, d.height
            ),
            Observation::HdStill(d) => write!(
                f,
                "hd is still {} pixels wide and {} pixels high",
                d.width, d.height
            ),
            Observation::FrameRate(fps) => write!(
                f,
                "The frameRate property of tenEighty is now {}",
                Float(*fps)
            ),
            Observation::SameInstance => write!(
                f,
                "tenEighty and alsoTenEighty refer to the same VideoMode instance."
            ),
            Observation::Closing => write!(f, "Hello world"),
        }
    }
}

/// Runs the value-vs-reference demonstration.
#[derive(Debug, Clone, Default)]
pub struct Script {
    config: ScriptConfig,
}

impl Script {
    /// Create a script with the given configuration.
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    /// Execute every step and return what was observed, in order.
    pub fn observations(&self) -> Vec<Observation> {
        let _span = info_span!("script").entered();

        let mut seen = Vec::with_capacity(8);
        accessing_properties(&mut seen);
        memberwise_initializers(&mut seen);
        let hd = value_types(&mut seen);
        reference_types(hd, &mut seen);
        seen.push(Observation::Closing);

        debug!(count = seen.len(), "demonstration finished");
        seen
    }

    /// Execute the demonstration and write the transcript to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut current = None;
        for observation in self.observations() {
            let section = observation.section();
            if self.config.annotate && current != Some(section) {
                if let Some(heading) = section.heading() {
                    writeln!(out, "// {}", heading)?;
                }
                current = Some(section);
            }
            writeln!(out, "{}", observation)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn accessing_properties(seen: &mut Vec<Observation>) {
    let some_resolution = Dimensions::default();
    let some_video_mode = VideoMode::new();
    debug!(%some_resolution, %some_video_mode, "built defaults");

    seen.push(Observation::ResolutionWidth(some_resolution.width));

    some_video_mode.update(|state| state.dimensions.width = 1280);
    trace!(width = some_video_mode.dimensions().width, "set width through handle");
    seen.push(Observation::VideoModeWidth(some_video_mode.dimensions().width));
}

fn memberwise_initializers(seen: &mut Vec<Observation>) {
    let vga = Dimensions::new(640, 480);
    debug!(%vga, "memberwise construction");
    seen.push(Observation::VgaWidth(vga.width));
}

fn value_types(seen: &mut Vec<Observation>) -> Dimensions {
    let hd = Dimensions::new(1920, 1080);
    let mut cinema = hd;
    cinema.width = 2048;
    debug!(%hd, %cinema, "mutated copy");

    seen.push(Observation::CinemaSize(cinema));
    seen.push(Observation::HdStill(hd));
    hd
}

fn reference_types(hd: Dimensions, seen: &mut Vec<Observation>) {
    let ten_eighty = VideoMode::new();
    ten_eighty.set_dimensions(hd);
    ten_eighty.set_interlaced(true);
    ten_eighty.set_name("1080i");
    ten_eighty.set_frame_rate(25.0);

    let also_ten_eighty = ten_eighty.clone();
    also_ten_eighty.set_frame_rate(30.0);
    debug!(
        %ten_eighty,
        handles = ten_eighty.handle_count(),
        "mutated through second handle"
    );

    seen.push(Observation::FrameRate(ten_eighty.frame_rate()));

    if ten_eighty.is_identical(&also_ten_eighty) {
        seen.push(Observation::SameInstance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let sections: Vec<Section> = Script::default()
            .observations()
            .iter()
            .map(Observation::section)
            .collect();
        assert_eq!(sections.first(), Some(&Section::AccessingProperties));
        assert_eq!(sections.last(), Some(&Section::Closing));
    }

    #[test]
    fn test_closing_has_no_heading() {
        assert_eq!(Section::Closing.heading(), None);
        assert_eq!(
            Section::ValueTypes.heading(),
            Some("Structures and Enumerations Are Value Types")
        );
    }

    #[test]
    fn test_frame_rate_line_keeps_fraction() {
        assert_eq!(
            Observation::FrameRate(30.0).to_string(),
            "The frameRate property of tenEighty is now 30.0"
        );
    }

    #[test]
    fn test_reference_types_reports_identity() {
        let mut seen = Vec::new();
        reference_types(Dimensions::new(1920, 1080), &mut seen);
        assert_eq!(
            seen,
            vec![Observation::FrameRate(30.0), Observation::SameInstance]
        );
    }
}
