// This code is part of Qiskit.
//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at https://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

/// How a character set writes sub- and superscripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScriptStyle {
    /// Digits and signs are translated to their Unicode script forms.
    Unicode,
    /// The text is prefixed with a marker character (`_` or `^`).
    Prefixed,
}

/// The glyphs used to draw a circuit as text.
///
/// Two sets are available: [CharSet::UNICODE], which uses box-drawing characters and
/// Unicode sub/superscripts, and [CharSet::ASCII], which restricts itself to printable ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSet {
    pub wire: &'static str,
    pub measurement: &'static str,
    pub top_multi_line_gate_connector: &'static str,
    pub middle_multi_line_gate_connector: &'static str,
    pub bottom_multi_line_gate_connector: &'static str,
    pub empty_multi_line_gate_connector: &'static str,
    pub control: &'static str,
    pub langle: &'static str,
    pub rangle: &'static str,
    pub vertical_line: &'static str,
    pub crossed_lines: &'static str,
    pub pipe: &'static str,
    pub otimes: &'static str,
    script: ScriptStyle,
}

impl CharSet {
    pub const UNICODE: CharSet = CharSet {
        wire: "─",
        measurement: "┤",
        top_multi_line_gate_connector: "╭",
        middle_multi_line_gate_connector: "├",
        bottom_multi_line_gate_connector: "╰",
        empty_multi_line_gate_connector: "│",
        control: "C",
        langle: "⟨",
        rangle: "⟩",
        vertical_line: "│",
        crossed_lines: "╳",
        pipe: "|",
        otimes: "⊗",
        script: ScriptStyle::Unicode,
    };

    pub const ASCII: CharSet = CharSet {
        wire: "-",
        measurement: "|",
        top_multi_line_gate_connector: "+",
        middle_multi_line_gate_connector: "+",
        bottom_multi_line_gate_connector: "+",
        empty_multi_line_gate_connector: "|",
        control: "C",
        langle: "<",
        rangle: ">",
        vertical_line: "|",
        crossed_lines: "X",
        pipe: "|",
        otimes: "@",
        script: ScriptStyle::Prefixed,
    };

    /// Write `value` as a superscript.  Characters without a superscript form are kept as is.
    pub fn to_superscript<T: ToString>(&self, value: T) -> String {
        let value = value.to_string();
        match self.script {
            ScriptStyle::Unicode => value.chars().map(superscript_char).collect(),
            ScriptStyle::Prefixed => format!("^{}", value),
        }
    }

    /// Write `value` as a subscript.  Characters without a subscript form are kept as is.
    pub fn to_subscript<T: ToString>(&self, value: T) -> String {
        let value = value.to_string();
        match self.script {
            ScriptStyle::Unicode => value.chars().map(subscript_char).collect(),
            ScriptStyle::Prefixed => format!("_{}", value),
        }
    }
}

impl Default for CharSet {
    fn default() -> Self {
        CharSet::UNICODE
    }
}

fn superscript_char(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        other => other,
    }
}

fn subscript_char(c: char) -> char {
    match c {
        '0'..='9' => char::from_u32('₀' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
        other => other,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unicode_scripts() {
        let charset = CharSet::UNICODE;
        assert_eq!(charset.to_superscript("-1"), "⁻¹");
        assert_eq!(charset.to_superscript(2), "²");
        assert_eq!(charset.to_subscript(0), "₀");
        assert_eq!(charset.to_subscript(1029), "₁₀₂₉");
        assert_eq!(charset.to_subscript("a1"), "a₁");
    }

    #[test]
    fn ascii_scripts() {
        let charset = CharSet::ASCII;
        assert_eq!(charset.to_superscript("-1"), "^-1");
        assert_eq!(charset.to_subscript(3), "_3");
    }
}
