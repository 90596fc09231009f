/// Maps a negative compass heading back into the 0..360 range by a
/// single +360 correction. Headings below -360 stay negative
/// (-450 maps to -90); providers never report such values, so the
/// single-step correction is kept as-is.
pub fn normalize_heading(heading: i32) -> i32 {
    if heading < 0 {
        heading + 360
    } else {
        heading
    }
}
