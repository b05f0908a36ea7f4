//! Integration tests for the HTML to Markdown converter.

use pastedown::convert;

#[test]
fn empty_and_whitespace_input_yield_empty_output() {
    assert_eq!(convert("").unwrap(), "");
    assert_eq!(convert("   \n\t  ").unwrap(), "");
}

#[test]
fn empty_blocks_yield_empty_output() {
    assert_eq!(convert("<p>   </p><div></div>").unwrap(), "");
    assert_eq!(convert("<h2>  </h2>").unwrap(), "");
}

#[test]
fn heading_and_paragraph() {
    assert_eq!(
        convert("<h1>Title</h1><p>Content</p>").unwrap(),
        "# Title\n\nContent"
    );
    assert_eq!(convert("<h3>Deep</h3>").unwrap(), "### Deep");
}

#[test]
fn div_is_a_paragraph_block() {
    assert_eq!(convert("<div>block</div>").unwrap(), "block");
}

#[test]
fn adjacent_paragraphs_are_separated_by_one_blank_line() {
    assert_eq!(convert("<p>a</p>\n<p>b</p>").unwrap(), "a\n\nb");
}

#[test]
fn emphasis_and_strikethrough() {
    assert_eq!(
        convert("<p><strong>Bold</strong> and <em>italic</em> and <del>gone</del></p>").unwrap(),
        "**Bold** and *italic* and ~~gone~~"
    );
    assert_eq!(convert("<p><b>b</b><i>i</i><s>s</s></p>").unwrap(), "**b***i*~~s~~");
}

#[test]
fn empty_inline_wrappers_emit_nothing() {
    assert_eq!(convert("<p>x<strong>   </strong>y</p>").unwrap(), "xy");
    assert_eq!(convert("<p><em></em></p>").unwrap(), "");
}

#[test]
fn mark_is_kept_as_raw_html() {
    assert_eq!(
        convert("<p>Use <mark>this</mark>.</p>").unwrap(),
        "Use <mark>this</mark>."
    );
}

#[test]
fn inline_code_fences_grow_past_embedded_backticks() {
    assert_eq!(convert("<p><code>x = 1</code></p>").unwrap(), "`x = 1`");
    assert_eq!(convert("<p><code>a`b</code></p>").unwrap(), "``a`b``");
    assert_eq!(convert("<p><code>a``b</code></p>").unwrap(), "```a``b```");
}

#[test]
fn inline_code_newlines_collapse_to_spaces() {
    assert_eq!(convert("<p><code>a\nb</code></p>").unwrap(), "`a b`");
}

#[test]
fn pre_becomes_a_fenced_block() {
    assert_eq!(
        convert("<pre><code>fn main() {}</code></pre>").unwrap(),
        "```\nfn main() {}\n```"
    );
}

#[test]
fn pre_strips_trailing_newlines_only() {
    assert_eq!(
        convert("<pre><code>line1\nline2\n\n</code></pre>").unwrap(),
        "```\nline1\nline2\n```"
    );
}

#[test]
fn pre_language_hint_from_code_or_pre_class() {
    assert_eq!(
        convert("<pre><code class=\"language-rust\">let x = 1;</code></pre>").unwrap(),
        "``` rust\nlet x = 1;\n```"
    );
    assert_eq!(
        convert("<pre class=\"language-js\"><code>x</code></pre>").unwrap(),
        "``` js\nx\n```"
    );
}

#[test]
fn pre_fence_grows_past_embedded_fences() {
    assert_eq!(
        convert("<pre><code>```\ncode\n```</code></pre>").unwrap(),
        "````\n```\ncode\n```\n````"
    );
}

#[test]
fn pre_without_code_child_uses_its_own_text() {
    assert_eq!(convert("<pre>plain text</pre>").unwrap(), "```\nplain text\n```");
}

#[test]
fn links_render_with_sanitized_targets() {
    assert_eq!(
        convert("<p>Link: <a href=\"https://example.com\">Example</a></p>").unwrap(),
        "Link: [Example](https://example.com)"
    );
}

#[test]
fn scripting_scheme_links_degrade_to_bare_text() {
    assert_eq!(convert("<a href=\"javascript:alert(1)\">click</a>").unwrap(), "click");
    assert_eq!(convert("<a href=\"VBScript:x\">click</a>").unwrap(), "click");
    assert_eq!(convert("<a href=\"data:text/html,x\">click</a>").unwrap(), "click");
}

#[test]
fn empty_link_text_falls_back_to_the_href() {
    assert_eq!(
        convert("<a href=\"https://example.com\">  </a>").unwrap(),
        "[https://example.com](https://example.com)"
    );
}

#[test]
fn link_without_href_renders_bare_text() {
    assert_eq!(convert("<a>plain</a>").unwrap(), "plain");
}

#[test]
fn images_render_with_sanitized_sources() {
    assert_eq!(
        convert("<p><img src=\"pic.png\" alt=\"A pic\"></p>").unwrap(),
        "![A pic](pic.png)"
    );
    assert_eq!(convert("<p><img src=\"x.png\"></p>").unwrap(), "![](x.png)");
    assert_eq!(
        convert("<p><img src=\"data:image/png;base64,AA\" alt=\"safe\"></p>").unwrap(),
        "safe"
    );
}

#[test]
fn line_breaks_and_rules() {
    assert_eq!(
        convert("<p>Line 1<br>Line 2</p><hr>").unwrap(),
        "Line 1\nLine 2\n\n---"
    );
    assert_eq!(convert("<hr>").unwrap(), "---");
}

#[test]
fn nested_unordered_lists_indent_two_spaces_per_level() {
    assert_eq!(
        convert("<ul><li>a</li><li>b<ul><li>c</li></ul></li></ul>").unwrap(),
        "- a\n- b\n  - c"
    );
}

#[test]
fn three_level_nesting() {
    assert_eq!(
        convert("<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li></ul>").unwrap(),
        "- a\n  - b\n    - c"
    );
}

#[test]
fn ordered_lists_honor_the_start_attribute() {
    assert_eq!(
        convert("<ol start=\"3\"><li>x</li><li>y</li></ol>").unwrap(),
        "3. x\n4. y"
    );
}

#[test]
fn ordered_start_zero_or_junk_numbers_from_one() {
    assert_eq!(
        convert("<ol start=\"0\"><li>x</li><li>y</li></ol>").unwrap(),
        "1. x\n2. y"
    );
    assert_eq!(convert("<ol start=\"abc\"><li>x</li></ol>").unwrap(), "1. x");
}

#[test]
fn ordered_numbering_restarts_per_list() {
    assert_eq!(
        convert("<ol><li>a</li></ol><ol><li>b</li></ol>").unwrap(),
        "1. a\n\n1. b"
    );
}

#[test]
fn ordered_list_nested_in_unordered() {
    assert_eq!(
        convert("<ul><li>a<ol><li>n1</li><li>n2</li></ol></li></ul>").unwrap(),
        "- a\n  1. n1\n  2. n2"
    );
}

#[test]
fn lists_skip_non_li_children_and_empty_items() {
    assert_eq!(
        convert("<ul><p>skip</p><li>  </li><li>kept</li></ul>").unwrap(),
        "- kept"
    );
}

#[test]
fn block_children_of_list_items_stay_tight() {
    assert_eq!(
        convert("<ul><li><p>first</p><p>second</p></li></ul>").unwrap(),
        "- first\n  second"
    );
}

#[test]
fn blockquote_prefixes_each_line() {
    assert_eq!(convert("<blockquote><p>quoted</p></blockquote>").unwrap(), "> quoted");
}

#[test]
fn blockquote_nesting_accumulates_markers() {
    assert_eq!(
        convert("<blockquote><blockquote><p>x</p></blockquote></blockquote>").unwrap(),
        "> > x"
    );
}

#[test]
fn blockquote_blank_lines_stay_blank() {
    assert_eq!(
        convert("<blockquote><p>a</p><p>b</p></blockquote>").unwrap(),
        "> a\n\n> b"
    );
}

#[test]
fn blockquote_containing_a_list() {
    assert_eq!(
        convert("<blockquote><ul><li>a</li></ul></blockquote>").unwrap(),
        "> - a"
    );
}

#[test]
fn table_with_header_and_body() {
    assert_eq!(
        convert(
            "<table><tr><th>H1</th><th>H2</th></tr><tr><td>a</td><td>b</td></tr></table>"
        )
        .unwrap(),
        "| H1 | H2 |\n| --- | --- |\n| a | b |"
    );
}

#[test]
fn ragged_rows_are_padded_to_the_widest_row() {
    assert_eq!(
        convert(
            "<table><tr><th>A</th><th>B</th><th>C</th></tr><tr><td>1</td><td>2</td></tr></table>"
        )
        .unwrap(),
        "| A | B | C |\n| --- | --- | --- |\n| 1 | 2 |  |"
    );
}

#[test]
fn header_row_is_found_anywhere_and_excluded_from_the_body() {
    assert_eq!(
        convert(
            "<table><tr><td>r1</td></tr><tr><th>H</th></tr><tr><td>r2</td></tr></table>"
        )
        .unwrap(),
        "| H |\n| --- |\n| r1 |\n| r2 |"
    );
}

#[test]
fn headerless_table_promotes_the_first_row() {
    assert_eq!(
        convert("<table><tr><td>only</td></tr><tr><td>second</td></tr></table>").unwrap(),
        "| only |\n| --- |\n| second |"
    );
}

#[test]
fn thead_tbody_wrapping_is_transparent() {
    assert_eq!(
        convert(
            "<table><thead><tr><th>H</th></tr></thead><tbody><tr><td>x</td></tr></tbody></table>"
        )
        .unwrap(),
        "| H |\n| --- |\n| x |"
    );
}

#[test]
fn cell_pipes_are_escaped_and_content_flattened() {
    assert_eq!(
        convert("<table><tr><td>a|b</td></tr></table>").unwrap(),
        "| a\\|b |\n| --- |"
    );
    assert_eq!(
        convert("<table><tr><th>Name</th></tr><tr><td><strong>bold</strong>\ntext</td></tr></table>")
            .unwrap(),
        "| Name |\n| --- |\n| bold text |"
    );
}

#[test]
fn table_inside_a_blockquote_is_quote_prefixed() {
    assert_eq!(
        convert(
            "<blockquote><table><tr><th>H</th></tr><tr><td>x</td></tr></table></blockquote>"
        )
        .unwrap(),
        "> | H |\n> | --- |\n> | x |"
    );
}

#[test]
fn unrecognized_tags_pass_children_through() {
    assert_eq!(
        convert("<p><span>a</span> <custom-tag>b</custom-tag></p>").unwrap(),
        "a b"
    );
}

#[test]
fn script_and_style_content_never_leaks() {
    assert_eq!(
        convert("<p>before</p><script>var x = 1;</script><style>.a{}</style><p>after</p>").unwrap(),
        "before\n\nafter"
    );
}

#[test]
fn full_documents_convert_their_body_only() {
    assert_eq!(
        convert(
            "<html><head><title>T</title><style>.x{}</style></head><body><p>body text</p></body></html>"
        )
        .unwrap(),
        "body text"
    );
}

#[test]
fn nbsp_becomes_a_plain_space() {
    assert_eq!(convert("<p>a&nbsp;b</p>").unwrap(), "a b");
}

#[test]
fn character_references_are_decoded() {
    assert_eq!(
        convert("<p>&lt;tag&gt; &amp; fish &#x2764;</p>").unwrap(),
        "<tag> & fish ❤"
    );
}

#[test]
fn whitespace_runs_collapse_outside_pre() {
    assert_eq!(convert("<p>Multiple    spaces</p>").unwrap(), "Multiple spaces");
}

#[test]
fn output_has_no_trailing_newline_or_leading_padding() {
    let markdown = convert("<p>a</p>").unwrap();
    assert_eq!(markdown, "a");
    let markdown = convert("<h1>x</h1>").unwrap();
    assert!(!markdown.starts_with('\n'));
    assert!(!markdown.ends_with('\n'));
}

#[test]
fn malformed_markup_degrades_instead_of_failing() {
    assert!(convert("<p>Unclosed<p>Another").is_ok());
    assert!(convert("</div></div><b><i>x</b></i>").is_ok());
    assert!(convert("<<<>>>").is_ok());
}
