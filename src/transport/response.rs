use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{NUMERIC_TAG_PREFIX, ResponseData, XmlNode};
use crate::transport::WireError;

const DATA: &str = "data";

static OPEN_NUMERIC_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([0-9]+)>").unwrap());
static CLOSE_NUMERIC_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</([0-9]+)>").unwrap());

/// Rewrite bare numeric tags (`<1>`, `</1>`) into valid XML names (`<result_1>`, `</result_1>`).
///
/// VTWhite lists results under tags named by their position, which no XML parser accepts.
fn normalize_numeric_tags(raw: &str) -> String {
    let opened = OPEN_NUMERIC_TAG.replace_all(raw, format!("<{NUMERIC_TAG_PREFIX}${{1}}>"));
    CLOSE_NUMERIC_TAG
        .replace_all(&opened, format!("</{NUMERIC_TAG_PREFIX}${{1}}>"))
        .into_owned()
}

/// Normalize and parse a raw response, returning the `data` child of the document root.
pub fn decode_response(raw: &str) -> Result<ResponseData, WireError> {
    let normalized = normalize_numeric_tags(raw);
    let doc = roxmltree::Document::parse(normalized.trim())?;
    let root = doc.root_element();

    let data = root
        .children()
        .find(|child| child.is_element() && child.has_tag_name(DATA))
        .ok_or_else(|| WireError::MissingData {
            root: root.tag_name().name().to_owned(),
        })?;

    Ok(ResponseData::new(to_xml_node(data)))
}

fn to_xml_node(node: roxmltree::Node<'_, '_>) -> XmlNode {
    let mut text = String::new();
    let mut children = Vec::new();

    for child in node.children() {
        if child.is_element() {
            children.push(to_xml_node(child));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    let trimmed = text.trim();
    XmlNode {
        name: node.tag_name().name().to_owned(),
        text: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_owned(), attr.value().to_owned()))
            .collect(),
        children,
    }
}
