//! The closed vocabulary of plot option names.

use std::fmt;
use std::str::FromStr;

macro_rules! option_keys {
    ($($variant:ident => $name:literal,)+) => {
        /// A recognized plot option.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum OptionKey {
            $($variant,)+
        }

        impl OptionKey {
            /// Every recognized option, in display order.
            pub const ALL: &'static [OptionKey] = &[$(OptionKey::$variant,)+];

            /// Lower-case option name as written by callers.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(OptionKey::$variant => $name,)+
                }
            }
        }

        impl FromStr for OptionKey {
            type Err = ();

            /// Matches a lower-case name exactly.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(OptionKey::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

option_keys! {
    Alpha => "alpha",
    AxesLabel => "axeslabel",
    AxisLim => "axislim",
    AxisMax => "axismax",
    AxisMin => "axismin",
    CmapZData => "cmapzdata",
    Colormap => "colormap",
    IndexX => "index_x",
    IndexY => "index_y",
    LineSpec => "linespec",
    LineWidth => "linewidth",
    LocationColorbar => "locationcolorbar",
    MarkerColor => "markercolor",
    MarkerDisplayed => "markerdisplayed",
    MarkerLabel => "markerlabel",
    MarkerLabelColor => "markerlabelcolor",
    MarkerLegend => "markerlegend",
    MarkerSize => "markersize",
    MarkerSymbol => "markersymbol",
    Overlay => "overlay",
    PlotType => "plottype",
    Ticks => "ticks",
    TitleColorbar => "titlecolorbar",
    XTickLabelPos => "xticklabelpos",
    YTickLabelPos => "yticklabelpos",
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
