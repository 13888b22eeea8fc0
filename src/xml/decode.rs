use quick_xml::{
    errors::IllFormedError,
    events::{BytesStart, Event},
    Reader,
};

use crate::xml::XmlElement;

/// A decoded document: the root element and its tag name.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root_name: String,
    pub root: XmlElement,
}

/// Decodes markup into an attribute/text tree.
///
/// Returns `Ok(None)` for a document without a root element. The root is always
/// returned as an element, even when it only holds text.
pub fn parse_document(xml: &str) -> Result<Option<XmlDocument>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<(String, XmlElement)> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push((tag_name(&start), element_from_attributes(&start)?));
            }
            Event::Empty(start) => {
                let name = tag_name(&start);
                let element = element_from_attributes(&start)?;
                match stack.last_mut() {
                    Some((_, parent)) => parent.insert(name, element.into_value()),
                    None => {
                        return Ok(Some(XmlDocument {
                            root_name: name,
                            root: element,
                        }))
                    }
                }
            }
            Event::Text(text) => {
                if let Some((_, element)) = stack.last_mut() {
                    let text = text.unescape()?;
                    if !text.is_empty() {
                        element.push_text(&text);
                    }
                }
            }
            Event::CData(data) => {
                if let Some((_, element)) = stack.last_mut() {
                    element.push_text(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let Some((name, element)) = stack.pop() else {
                    continue;
                };
                match stack.last_mut() {
                    Some((_, parent)) => parent.insert(name, element.into_value()),
                    None => {
                        return Ok(Some(XmlDocument {
                            root_name: name,
                            root: element,
                        }))
                    }
                }
            }
            Event::Eof => {
                return match stack.pop() {
                    Some((name, _)) => Err(quick_xml::Error::IllFormed(
                        IllFormedError::MissingEndTag(name),
                    )),
                    None => Ok(None),
                };
            }
            _ => {}
        }
    }
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn element_from_attributes(start: &BytesStart<'_>) -> Result<XmlElement, quick_xml::Error> {
    let mut element = XmlElement::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element = element.with_attr(key, value);
    }
    Ok(element)
}
