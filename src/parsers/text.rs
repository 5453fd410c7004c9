/// Normalizes text or Markdown for output.
///
/// - Line endings become `\n`
/// - Trailing whitespace is removed from every line (indentation is kept)
/// - Runs of blank lines collapse into a single blank line
/// - Leading and trailing blank lines are dropped
///
/// Lines inside ``` or ~~~ fenced code blocks are kept verbatim.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if text.trim().is_empty() {
        return String::new();
    }

    split_into_paragraphs(&text)
        .iter()
        .map(|para| para.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits text into paragraphs based on blank lines outside code fences
pub fn split_into_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current_paragraph: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in text.lines() {
        if in_fence {
            current_paragraph.push(line);
            in_fence = !is_fence_marker(line);
            continue;
        }

        let line = line.trim_end();
        if is_fence_marker(line) {
            in_fence = true;
            current_paragraph.push(line);
            continue;
        }

        if line.is_empty() {
            if !current_paragraph.is_empty() {
                paragraphs.push(std::mem::take(&mut current_paragraph));
            }
        } else {
            current_paragraph.push(line);
        }
    }

    if !current_paragraph.is_empty() {
        paragraphs.push(current_paragraph);
    }

    paragraphs
}

fn is_fence_marker(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("```") || line.starts_with("~~~")
}
