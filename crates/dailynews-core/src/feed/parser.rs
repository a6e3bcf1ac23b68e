use quick_xml::events::Event;
use quick_xml::Reader;

use super::models::FeedItem;
use crate::{Error, Result};

#[derive(Clone, Copy)]
enum Field {
    Title,
    Date,
}

/// Extract title/date pairs from RSS content.
///
/// Scans the document for `<item>` elements at any nesting depth and reads
/// the text of the first direct `<title>` and `<pubDate>` children of each.
/// Items missing either field are skipped with a warning rather than
/// failing the whole document.
pub fn extract_items(content: &[u8]) -> Result<Vec<FeedItem>> {
    let text = String::from_utf8_lossy(content);
    let mut reader = Reader::from_str(&text);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut saw_element = false;
    let mut depth = 0usize;
    // Depth at which the currently open <item> started, if any
    let mut item_depth: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut date: Option<String> = None;
    // Direct child of the current item whose text is being captured
    let mut field: Option<Field> = None;
    let mut field_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                saw_element = true;
                depth += 1;
                match item_depth {
                    None if e.name().as_ref() == b"item" => {
                        item_depth = Some(depth);
                        title = None;
                        date = None;
                    }
                    Some(d) if depth == d + 1 => {
                        field = match e.name().as_ref() {
                            b"title" => Some(Field::Title),
                            b"pubDate" => Some(Field::Date),
                            _ => None,
                        };
                        field_text.clear();
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if field.is_some() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| Error::FeedParse(format!("Failed to parse feed: {}", e)))?;
                    field_text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if field.is_some() {
                    field_text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(d) = item_depth {
                    if depth == d + 1 {
                        match field.take() {
                            Some(Field::Title) if title.is_none() => {
                                title = Some(field_text.clone())
                            }
                            Some(Field::Date) if date.is_none() => {
                                date = Some(field_text.clone())
                            }
                            _ => {}
                        }
                    } else if depth == d {
                        match (title.take(), date.take()) {
                            (Some(title), Some(date)) => items.push(FeedItem { title, date }),
                            (t, _) => {
                                let missing = if t.is_none() { "title" } else { "pubDate" };
                                tracing::warn!(
                                    "Skipping feed item without <{}> at position {}",
                                    missing,
                                    items.len()
                                );
                            }
                        }
                        item_depth = None;
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Empty(_)) => saw_element = true,
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::FeedParse(format!("Failed to parse feed: {}", e)));
            }
            _ => {}
        }
    }

    // A body with no markup at all is not a feed, not an empty feed
    if !saw_element {
        return Err(Error::FeedParse(
            "Document contains no XML elements".to_string(),
        ));
    }

    Ok(items)
}
