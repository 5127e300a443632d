//! C++ source generation for the CTRPluginFramework plugin.
//!
//! [`draw_source`] is a pure function from geometry + channel data to the
//! text of `draw_image.cpp`: identical inputs always produce byte-identical
//! output. No filesystem concerns here — writing the tree is
//! [`scaffold`](crate::scaffold)'s job.
//!
//! The generated routine selects a screen, then walks rows top to bottom and
//! columns left to right with one running index into the three channel
//! arrays. That iteration order is the contract the channel split upholds;
//! see [`channels`](crate::imaging::channels).

use crate::imaging::ChannelBuffer;
use crate::types::{Dimensions, Position, ScreenTarget};

/// Fixed declaration header written to `Includes/draw_image.hpp`.
pub const HEADER_SOURCE: &str = "
#ifndef DRAW_H
#define DRAW_H

#include <CTRPluginFramework.hpp>

namespace CTRPluginFramework
{
    void draw_image(void);
}

#endif
";

/// Fixed `Sources/cheats.cpp` stub; independent of the image content.
pub const CHEATS_STUB: &str = "
#include \"draw_image.hpp\"
// ...
";

/// Render the `draw_image.cpp` text for one converted image.
pub fn draw_source(
    target: ScreenTarget,
    position: Position,
    dimensions: Dimensions,
    channels: &ChannelBuffer,
) -> String {
    format!(
        "
#include \"draw_image.hpp\"

namespace CTRPluginFramework
{{
	void draw_image(void) {{
		bool draw_bottom_screen = {bottom};
		const Screen &scr = draw_bottom_screen ? OSD::GetBottomScreen() : OSD::GetTopScreen();

		int x = {x};
		int y = {y};
		int width = {width};
		int height = {height};

		u8 r[] = {{{r}}};
		u8 g[] = {{{g}}};
		u8 b[] = {{{b}}};

		int i = 0;

		for (int yy = 0; yy < height; yy++) {{
			for (int xx = 0; xx < width; xx++) {{
				scr.DrawPixel(xx + x, yy + y, Color(r[i], g[i], b[i], 255));
				i++;
			}}
		}}
	}}
}}
",
        bottom = target.is_bottom(),
        x = position.x,
        y = position.y,
        width = dimensions.width,
        height = dimensions.height,
        r = byte_list(&channels.red),
        g = byte_list(&channels.green),
        b = byte_list(&channels.blue),
    )
}

/// Comma-joined decimal rendering of a byte sequence, e.g. `1,2,255`.
fn byte_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
