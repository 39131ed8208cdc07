//! Diagnostics reported by providers.
//!
//! Providers report per-operation problems as a list of diagnostics rather
//! than failing the RPC, so a single response can carry several errors and
//! warnings at once. This module defines the host-side representation and the
//! translation from wire diagnostics and from gRPC statuses.

use crate::proto;

/// How severe a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation failed; any result data should not be trusted.
    Error,
    /// The operation succeeded but the user should be told something.
    Warning,
}

/// A single problem or notice reported by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Whether this diagnostic is an error or a warning.
    pub severity: Severity,
    /// Short, single-line description.
    pub summary: String,
    /// Optional longer description, possibly multiple paragraphs.
    pub detail: String,
    /// Dotted path to the configuration attribute this relates to, if any.
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with the given summary.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: String::new(),
            attribute: None,
        }
    }

    /// Create a warning diagnostic with the given summary.
    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: String::new(),
            attribute: None,
        }
    }

    /// Attach a detailed description.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Attach the attribute path this diagnostic relates to.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

impl From<proto::Diagnostic> for Diagnostic {
    fn from(d: proto::Diagnostic) -> Self {
        // An out-of-range severity means the provider is speaking a newer
        // protocol revision; treating it as an error is the safe reading.
        let severity = match proto::diagnostic::Severity::try_from(d.severity) {
            Ok(proto::diagnostic::Severity::Warning) => Severity::Warning,
            _ => Severity::Error,
        };
        Self {
            severity,
            summary: d.summary,
            detail: d.detail,
            attribute: if d.attribute.is_empty() {
                None
            } else {
                Some(d.attribute)
            },
        }
    }
}

impl From<Diagnostic> for proto::Diagnostic {
    fn from(d: Diagnostic) -> Self {
        let severity = match d.severity {
            Severity::Error => proto::diagnostic::Severity::Error,
            Severity::Warning => proto::diagnostic::Severity::Warning,
        };
        Self {
            severity: severity as i32,
            summary: d.summary,
            detail: d.detail,
            attribute: d.attribute.unwrap_or_default(),
        }
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate the diagnostics carried on a wire response.
    pub fn from_proto(diags: Vec<proto::Diagnostic>) -> Self {
        Self(diags.into_iter().map(Diagnostic::from).collect())
    }

    /// Append a single diagnostic.
    pub fn push(&mut self, diag: Diagnostic) {
        self.0.push(diag);
    }

    /// Append every diagnostic from `other`.
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Append the diagnostics carried on a wire response.
    pub fn extend_proto(&mut self, diags: Vec<proto::Diagnostic>) {
        self.0.extend(diags.into_iter().map(Diagnostic::from));
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    /// Whether the collection holds no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many diagnostics the collection holds.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the diagnostics in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diags: Vec<Diagnostic>) -> Self {
        Self(diags)
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diag: Diagnostic) -> Self {
        Self(vec![diag])
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Translate a failed RPC into a user-facing diagnostic.
///
/// `operation` names the call that failed, e.g. `"ReadResource"`. The gRPC
/// status code picks the wording: an `Unavailable` status almost always means
/// the provider process exited or crashed mid-call, which deserves a clearer
/// message than the raw transport error.
pub fn rpc_error(operation: &str, status: &tonic::Status) -> Diagnostic {
    match status.code() {
        tonic::Code::Unavailable => Diagnostic::error("Provider did not respond")
            .with_detail(format!(
                "The provider encountered an error, and failed to respond to the \
                 {operation} call. The provider logs may contain more details.",
            )),
        tonic::Code::Cancelled => Diagnostic::error("Request cancelled").with_detail(format!(
            "The {operation} request was cancelled.",
        )),
        tonic::Code::Unimplemented => {
            Diagnostic::error(format!("Provider does not support {operation}")).with_detail(
                "The installed provider does not implement this operation. \
                 Upgrading the provider may resolve this.",
            )
        }
        _ => Diagnostic::error("Provider error").with_detail(format!(
            "The provider returned an unexpected error from the {operation} call: {}",
            status.message(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_severity_reads_as_error() {
        let wire = proto::Diagnostic {
            severity: 0,
            summary: "something odd".to_string(),
            detail: String::new(),
            attribute: String::new(),
        };
        let diag = Diagnostic::from(wire);
        assert_eq!(diag.severity, Severity::Error);
    }

    #[test]
    fn test_attribute_round_trip() {
        let diag = Diagnostic::error("bad value").with_attribute("network.0.cidr");
        let wire: proto::Diagnostic = diag.clone().into();
        assert_eq!(wire.attribute, "network.0.cidr");
        assert_eq!(Diagnostic::from(wire), diag);

        let wire = proto::Diagnostic {
            severity: proto::diagnostic::Severity::Warning as i32,
            summary: "deprecated".to_string(),
            detail: String::new(),
            attribute: String::new(),
        };
        assert_eq!(Diagnostic::from(wire).attribute, None);
    }

    #[test]
    fn test_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.push(Diagnostic::warning("minor"));
        assert!(!diags.has_errors());

        diags.push(Diagnostic::error("major"));
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_rpc_error_unavailable() {
        let status = tonic::Status::unavailable("transport closed");
        let diag = rpc_error("PlanResourceChange", &status);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.summary, "Provider did not respond");
        assert!(diag.detail.contains("PlanResourceChange"));
    }

    #[test]
    fn test_rpc_error_unimplemented() {
        let status = tonic::Status::unimplemented("");
        let diag = rpc_error("MoveResourceState", &status);
        assert_eq!(diag.summary, "Provider does not support MoveResourceState");
    }
}
