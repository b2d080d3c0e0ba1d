use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical scales
// ---------------------------------------------------------------------------

/// An ordered quality scale for one categorical attribute.
///
/// The position of a label within `labels` is the ordinal value the trained
/// model expects for that attribute, so the order is frozen: it must never
/// change independently of the model artifact.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

impl Scale {
    /// Ordinal index of `label`, by exact case-sensitive match.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }
}

/// Cut quality, worst to best.
pub static CUT: Scale = Scale {
    name: "cut",
    labels: &["Fair", "Good", "Very Good", "Premium", "Ideal"],
};

/// Color grade, worst (J) to best (D).
pub static COLOR: Scale = Scale {
    name: "color",
    labels: &["J", "I", "H", "G", "F", "E", "D"],
};

/// Clarity grade, worst (I1) to best (IF).
pub static CLARITY: Scale = Scale {
    name: "clarity",
    labels: &["I1", "SI2", "SI1", "VS2", "VS1", "VVS2", "VVS1", "IF"],
};

/// The feature schema the predictor is trained on: carat, cut, color, clarity.
pub const FEATURE_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Carat input boundary
// ---------------------------------------------------------------------------

/// Whether `text` is allowed into the carat field at all.
///
/// Admits the empty string and unsigned decimal text (ASCII digits, at most
/// one `.`). Signs, exponents, and `inf`/`NaN` spellings are rejected here,
/// before they ever reach the field.
pub fn accepts_carat_text(text: &str) -> bool {
    let mut seen_dot = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Parse committed carat text into a weight.
///
/// `None` means "incomplete": the empty string and a lone `.` are normal
/// mid-edit states, and a digit string long enough to overflow f64 is also
/// withheld rather than priced.
pub fn parse_carat(text: &str) -> Option<f64> {
    if text.is_empty() || text == "." {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

// ---------------------------------------------------------------------------
// Form session
// ---------------------------------------------------------------------------

/// Current values of the four form fields.
///
/// `None` selections mean "not yet chosen", a distinct state, not a label.
/// `carat_text` only ever holds text that passed [`accepts_carat_text`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub carat_text: String,
    pub cut: Option<&'static str>,
    pub color: Option<&'static str>,
    pub clarity: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// The encoded feature vector, in the order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub carat: f64,
    pub cut: usize,
    pub color: usize,
    pub clarity: usize,
}

impl FeatureVector {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.carat,
            self.cut as f64,
            self.color as f64,
            self.clarity as f64,
        ]
    }
}

/// Outcome of encoding a session: a full feature vector, or not yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoded {
    Complete(FeatureVector),
    /// At least one field is unset or mid-edit. A normal transient state.
    Incomplete,
}

#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    /// A selection is not in its scale. The UI constrains selections to the
    /// scale labels, so this path is defensive only.
    #[error("label '{label}' is not in the {scale} scale")]
    UnknownLabel { scale: &'static str, label: String },
}

fn lookup(scale: &Scale, label: &str) -> Result<usize, EncodeError> {
    scale.index_of(label).ok_or_else(|| EncodeError::UnknownLabel {
        scale: scale.name,
        label: label.to_string(),
    })
}

/// Encode the session into the model's feature vector.
///
/// Incomplete input is reported as [`Encoded::Incomplete`], never as an
/// error; only an out-of-scale label produces `Err`.
pub fn encode(session: &FormSession) -> Result<Encoded, EncodeError> {
    let Some(carat) = parse_carat(&session.carat_text) else {
        return Ok(Encoded::Incomplete);
    };
    let (Some(cut), Some(color), Some(clarity)) = (session.cut, session.color, session.clarity)
    else {
        return Ok(Encoded::Incomplete);
    };

    Ok(Encoded::Complete(FeatureVector {
        carat,
        cut: lookup(&CUT, cut)?,
        color: lookup(&COLOR, color)?,
        clarity: lookup(&CLARITY, clarity)?,
    }))
}
