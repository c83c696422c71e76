use std::io::Cursor;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use spdlog::warn;

use crate::render::{DisplayNode, NodeText, Role};

/* Example
<article><h1>Hello</h1><p>one<br/>&lt;two&gt;</p><details open=""><summary>JS code</summary>
<pre><code class="language-js">let a = 1 &lt; 2;</code></pre></details><hr/></article>
*/

/// Serializes a display tree as HTML markup.
pub fn to_html(node: &DisplayNode) -> String {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    if let Err(e) = write_node(&mut writer, node) {
        // Only reachable if the in-memory buffer fails to grow
        warn!("Error writing display tree: {}", e);
    }
    let buf = writer.into_inner().into_inner();
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &DisplayNode) -> quick_xml::Result<()> {
    if node.role == Role::TextRun {
        if let Some(ref text) = node.text {
            write_text(writer, text)?;
        }
        return Ok(());
    }

    let tag = node.role.tag_name();
    let mut start = BytesStart::new(tag);
    for (name, value) in node.attributes.iter() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.role.is_void() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(ref text) = node.text {
        write_text(writer, text)?;
    }
    for child in node.children.iter() {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;

    Ok(())
}

fn write_text(writer: &mut Writer<Cursor<Vec<u8>>>, text: &NodeText) -> quick_xml::Result<()> {
    let event = match text {
        NodeText::Literal(s) => BytesText::from_escaped(partial_escape(s.as_str())),
        NodeText::Escaped(s) => BytesText::from_escaped(s.as_str()),
    };
    writer.write_event(Event::Text(event))?;
    Ok(())
}
