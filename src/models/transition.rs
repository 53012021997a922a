//! Page transition descriptors consumed by the page host.

/// Visual category of a route change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionType {
    /// Moving deeper in the navigation order
    SlideLeft,
    /// Moving shallower in the navigation order
    SlideRight,
    /// Same depth or unrelated routes
    Fade,
    /// Initial render or same route
    #[default]
    None,
}

impl TransitionType {
    /// Name used for CSS hooks (`slide-left`, `fade`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::Fade => "fade",
            Self::None => "none",
        }
    }
}

/// Direction recorded by the last navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Back,
    #[default]
    None,
}

/// Transition type paired with its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionConfig {
    pub kind: TransitionType,
    pub duration_ms: u32,
}

/// One keyframe of a page's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFrame {
    /// Horizontal offset as a percentage of the page width.
    pub x_percent: f64,
    pub scale: f64,
    /// 3-D rotation around the Y axis in degrees.
    pub rotate_y: f64,
    pub opacity: f64,
}

impl PageFrame {
    /// Untransformed, fully opaque page.
    pub const IDENTITY: PageFrame = PageFrame {
        x_percent: 0.0,
        scale: 1.0,
        rotate_y: 0.0,
        opacity: 1.0,
    };

    /// CSS `transform` value for this frame.
    pub fn transform(&self) -> String {
        format!(
            "perspective(1200px) translateX({}%) scale({}) rotateY({}deg)",
            self.x_percent, self.scale, self.rotate_y
        )
    }

}

impl Default for PageFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Entry and exit keyframes for a page transition.
///
/// `initial` is where the entering page starts, `animate` where it settles,
/// and `exit` where the leaving page ends up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageAnimation {
    pub initial: PageFrame,
    pub animate: PageFrame,
    pub exit: PageFrame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_type_names() {
        assert_eq!(TransitionType::SlideLeft.as_str(), "slide-left");
        assert_eq!(TransitionType::SlideRight.as_str(), "slide-right");
        assert_eq!(TransitionType::None.as_str(), "none");
    }

    #[test]
    fn test_identity_transform() {
        let transform = PageFrame::IDENTITY.transform();
        assert!(transform.contains("translateX(0%)"));
        assert!(transform.contains("scale(1)"));
        assert!(transform.contains("rotateY(0deg)"));
    }
}
