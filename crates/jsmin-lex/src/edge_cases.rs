//! Edge case tests for jsmin-lex

#[cfg(test)]
mod tests {
    use crate::minify;

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty() {
        assert_eq!(minify(""), "");
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(minify(" \t \n \r\n "), "");
    }

    #[test]
    fn test_edge_single_char() {
        assert_eq!(minify("a"), "a");
        assert_eq!(minify("+"), "+");
        assert_eq!(minify(";"), ";");
    }

    #[test]
    fn test_edge_bom_only() {
        assert_eq!(minify("\u{feff}"), "");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let out = minify(&format!("var {} = 1;", name));
        assert!(out.contains(&name));
    }

    #[test]
    fn test_edge_deeply_nested_interpolations() {
        // `${`${`${` ... repeated; must not recurse or panic.
        let depth = 500;
        let mut src = String::from("x = ");
        for _ in 0..depth {
            src.push_str("`${");
        }
        let out = minify(&src);
        assert!(out.starts_with("x=`${"));
    }

    #[test]
    fn test_edge_control_chars_are_whitespace() {
        assert_eq!(minify("a\u{0b}\u{0c}b"), "a b");
        assert_eq!(minify("a\0b"), "a b");
    }

    #[test]
    fn test_edge_cr_only_line_endings() {
        assert_eq!(minify("a = b\rc = d"), "a=b\nc=d");
    }

    #[test]
    fn test_edge_numbers_pass_through() {
        assert_eq!(minify("x = 0xFF + 0b101 + 1.5e-3"), "x=0xFF+0b101+1.5e-3");
    }

    #[test]
    fn test_edge_unicode_escape_identifier() {
        assert_eq!(minify("var \\u0061b = 1"), "var \\u0061b=1");
    }

    #[test]
    fn test_edge_non_ascii_passthrough() {
        assert_eq!(minify("s = '«quoted»'"), "s='«quoted»'");
        assert_eq!(minify("emoji = \"🙂\""), "emoji=\"🙂\"");
    }

    #[test]
    fn test_edge_punctuation_soup() {
        assert_eq!(minify("a = b === c ? d : e"), "a=b===c?d:e");
        assert_eq!(minify("a && b || ! c"), "a&&b||!c");
        assert_eq!(minify("x >>>= 2"), "x>>>=2");
    }

    #[test]
    fn test_edge_arrow_functions() {
        assert_eq!(minify("f = ( a , b ) => a + b"), "f=(a,b)=>a+b");
    }

    #[test]
    fn test_edge_trailing_semicolon_before_eof() {
        assert_eq!(minify("a();"), "a();");
        assert_eq!(minify("a(); "), "a();");
    }

    #[test]
    fn test_edge_semicolon_only() {
        assert_eq!(minify(";;;"), ";;;");
        assert_eq!(minify("; } "), "}");
    }

    #[test]
    fn test_edge_keyword_then_paren_regex() {
        // `(` resets to a regex position even right after a keyword chain.
        assert_eq!(minify("if ( /a/ .test(s)) {}"), "if(/a/.test(s)){}");
    }

    #[test]
    fn test_edge_label_like() {
        assert_eq!(minify("loop : for (;;) { break loop ; }"), "loop:for(;;){break loop}");
    }

    #[test]
    fn test_edge_output_never_longer() {
        for src in [
            "a + b",
            "function f() { return 1; }",
            "t = `a ${ b } c`",
            "// comment only",
            "x=/a/g",
        ] {
            assert!(minify(src).len() <= src.len(), "grew for {src:?}");
        }
    }
}
