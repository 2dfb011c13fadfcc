use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::domain::{ArgumentName, FunctionName, Password, Username};
use crate::transport::WireError;

const PACKET: &str = "packet";
const AUTH: &str = "auth";
const DATA: &str = "data";

/// Form field carrying the serialized packet.
pub const PACKET_FIELD: &str = "packet";

/// Serialize a request packet.
///
/// Text content is XML-escaped; element names are already validated by [`ArgumentName`].
pub fn encode_packet(
    user: &str,
    pass: &str,
    function: &FunctionName,
    args: &[(ArgumentName, String)],
) -> Result<String, WireError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new(PACKET)))?;

    writer.write_event(Event::Start(BytesStart::new(AUTH)))?;
    write_text_element(&mut writer, Username::FIELD, user)?;
    write_text_element(&mut writer, Password::FIELD, pass)?;
    writer.write_event(Event::End(BytesEnd::new(AUTH)))?;

    write_text_element(&mut writer, FunctionName::FIELD, function.as_str())?;

    if args.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(DATA)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(DATA)))?;
        for (name, value) in args {
            write_text_element(&mut writer, name.as_str(), value)?;
        }
        writer.write_event(Event::End(BytesEnd::new(DATA)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(PACKET)))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(name: &str, value: &str) -> (ArgumentName, String) {
        (ArgumentName::new(name).unwrap(), value.to_owned())
    }

    fn function(name: &str) -> FunctionName {
        FunctionName::new(name).unwrap()
    }

    #[test]
    fn packet_has_auth_function_and_one_data_child_per_argument() {
        let args = vec![
            arg("npa", "205"),
            arg("nxx", "555"),
            arg("route", "sip:foo@bar"),
        ];
        let xml = encode_packet("acme", "s3cret", &function("AddNumber"), &args).unwrap();

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "packet");

        let text_of = |path: &[&str]| {
            let mut node = root;
            for name in path {
                node = node
                    .children()
                    .find(|child| child.has_tag_name(*name))
                    .unwrap_or_else(|| panic!("missing <{name}> in {xml}"));
            }
            node.text().map(str::to_owned)
        };
        assert_eq!(text_of(&["auth", "user"]).as_deref(), Some("acme"));
        assert_eq!(text_of(&["auth", "pass"]).as_deref(), Some("s3cret"));
        assert_eq!(text_of(&["function"]).as_deref(), Some("AddNumber"));

        let data = root.children().find(|n| n.has_tag_name("data")).unwrap();
        let children = data
            .children()
            .filter(|n| n.is_element())
            .map(|n| (n.tag_name().name().to_owned(), n.text().unwrap_or_default().to_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            children,
            vec![
                ("npa".to_owned(), "205".to_owned()),
                ("nxx".to_owned(), "555".to_owned()),
                ("route".to_owned(), "sip:foo@bar".to_owned()),
            ]
        );
    }

    #[test]
    fn values_are_escaped() {
        let args = vec![arg("route", "</route><evil>&")];
        let xml = encode_packet("a<b", "p&q", &function("AddNumber"), &args).unwrap();

        assert!(!xml.contains("<evil>"));
        assert!(xml.contains("&lt;/route"));
        assert!(xml.contains("&amp;"));

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let route = doc.descendants().find(|n| n.has_tag_name("route")).unwrap();
        assert_eq!(route.text(), Some("</route><evil>&"));
        let user = doc.descendants().find(|n| n.has_tag_name("user")).unwrap();
        assert_eq!(user.text(), Some("a<b"));
    }

    #[test]
    fn empty_arguments_produce_empty_data() {
        let xml = encode_packet("acme", "pw", &function("GetNumbers"), &[]).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let data = doc.descendants().find(|n| n.has_tag_name("data")).unwrap();
        assert_eq!(data.children().filter(|n| n.is_element()).count(), 0);
    }
}
