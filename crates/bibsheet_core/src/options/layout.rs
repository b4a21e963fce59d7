/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Layout-facing options: fonts and block placement.

crate::str_enum! {
    /// Font choices offered to the user.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum FontFamily {
        #[default]
        Serif = "serif",
        SansSerif = "sans-serif",
        Monospace = "monospace",
        Times = "times",
        Arial = "arial",
        Helvetica = "helvetica",
        Georgia = "georgia",
        Palatino = "palatino",
        Garamond = "garamond",
        Courier = "courier",
        Verdana = "verdana",
        Trebuchet = "trebuchet",
    }
}

impl FontFamily {
    /// The concrete font stack handed to the host document.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
            FontFamily::Times => "Times New Roman, serif",
            FontFamily::Arial => "Arial, sans-serif",
            FontFamily::Helvetica => "Helvetica, sans-serif",
            FontFamily::Georgia => "Georgia, serif",
            FontFamily::Palatino => "Palatino Linotype, serif",
            FontFamily::Garamond => "Garamond, serif",
            FontFamily::Courier => "Courier New, monospace",
            FontFamily::Verdana => "Verdana, sans-serif",
            FontFamily::Trebuchet => "Trebuchet MS, sans-serif",
        }
    }
}

crate::str_enum! {
    /// Where the reference block is anchored on the canvas.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum PositionMode {
        Center = "center",
        TopLeft = "top-left",
        TopCenter = "top-center",
        TopRight = "top-right",
        BottomLeft = "bottom-left",
        BottomCenter = "bottom-center",
        BottomRight = "bottom-right",
        #[default]
        Custom = "custom",
    }
}
