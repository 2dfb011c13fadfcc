/// Prefix given to purely numeric tag names before parsing (`<1>` becomes `<result_1>`).
pub const NUMERIC_TAG_PREFIX: &str = "result_";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One element of a parsed VTWhite response.
pub struct XmlNode {
    pub name: String,
    /// Concatenated, trimmed text content; `None` when empty.
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|child| child.text.as_deref())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Index `N` if this element was a numeric tag (`<N>`) in the raw response.
    pub fn result_index(&self) -> Option<u64> {
        self.name
            .strip_prefix(NUMERIC_TAG_PREFIX)
            .and_then(|digits| digits.parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The `data` node of a VTWhite response.
pub struct ResponseData(XmlNode);

impl ResponseData {
    pub fn new(node: XmlNode) -> Self {
        Self(node)
    }

    pub fn node(&self) -> &XmlNode {
        &self.0
    }

    pub fn into_node(self) -> XmlNode {
        self.0
    }

    /// Raw `success` flag, usually `TRUE` or `FALSE`.
    pub fn success(&self) -> Option<&str> {
        self.0.child_text("success")
    }

    /// `success` compared case-insensitively against `TRUE`.
    pub fn is_success(&self) -> bool {
        self.success()
            .is_some_and(|value| value.eq_ignore_ascii_case("TRUE"))
    }

    /// `error` text, `None` when missing or empty.
    pub fn error(&self) -> Option<&str> {
        self.0.child_text("error")
    }

    /// Numbered result entries (`<1>`, `<2>`, ...) sorted by their index.
    pub fn numbered(&self) -> Vec<&XmlNode> {
        let mut entries = self
            .0
            .children
            .iter()
            .filter_map(|child| child.result_index().map(|idx| (idx, child)))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(idx, _)| *idx);
        entries.into_iter().map(|(_, child)| child).collect()
    }

    /// Summarize `success` / `error` the way status-mode calls report them.
    pub fn status(&self) -> CallStatus {
        if self.is_success() {
            return CallStatus::Success;
        }
        match self.error() {
            Some(error) => CallStatus::Error(error.to_owned()),
            None => CallStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a status-mode call.
pub enum CallStatus {
    /// `success` was `TRUE` (any case).
    Success,
    /// `success` was not true and the service supplied an error message.
    Error(String),
    /// `success` was not true and no error message was given.
    ///
    /// Error text made only of whitespace counts as absent.
    Unknown,
}

impl CallStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`crate::ApiClient::send`], shaped by [`crate::ReturnMode`].
pub enum Reply {
    Output(ResponseData),
    Status(CallStatus),
}
