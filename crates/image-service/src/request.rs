//! `exportImage` request URL construction.

use map_common::BoundingBox;

use crate::info::ImageServiceInfo;

/// Build the request URL for an image covering `extent` at `width`x`height`
/// pixels.
///
/// Parameters are appended in a fixed order to whatever query the base URL
/// already carries. Numbers are formatted with `Display`, which does not
/// depend on the host locale.
pub fn build_request_url(
    info: &ImageServiceInfo,
    extent: &BoundingBox,
    width: i32,
    height: i32,
) -> String {
    let mut url = String::with_capacity(info.url.len() + 160);
    url.push_str(&info.url);

    if !info.url.contains('?') {
        url.push('?');
    }
    if !url.ends_with('&') && !url.ends_with('?') {
        url.push('&');
    }

    url.push_str(&format!(
        "bbox={},{},{},{}",
        extent.min_x, extent.min_y, extent.max_x, extent.max_y
    ));
    url.push_str(&format!("&size={},{}", width, height));
    url.push_str(&format!("&interpolation=RSP_{}", info.interpolation));
    url.push_str(&format!("&format={}", info.format));
    url.push_str(&format!("&f={}", info.f));
    url.push_str(&format!("&imageSR={}", info.image_sr));
    url.push_str(&format!("&bboxSR={}", info.bbox_sr));
    url.push_str(&format!("&time={}", info.time));

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_base_url_gets_question_mark() {
        let info = ImageServiceInfo::new("http://host/exportImage");
        let url = build_request_url(&info, &BoundingBox::new(0.0, 0.0, 1.0, 1.0), 10, 10);
        assert!(url.starts_with("http://host/exportImage?bbox=0,0,1,1&size=10,10"));
    }

    #[test]
    fn test_existing_query_gets_ampersand() {
        let info = ImageServiceInfo::new("http://host/exportImage?token=abc");
        let url = build_request_url(&info, &BoundingBox::new(0.0, 0.0, 1.0, 1.0), 10, 10);
        assert!(url.starts_with("http://host/exportImage?token=abc&bbox="));
    }

    #[test]
    fn test_trailing_question_mark_is_reused() {
        let info = ImageServiceInfo::new("http://host/exportImage?");
        let url = build_request_url(&info, &BoundingBox::new(0.0, 0.0, 1.0, 1.0), 10, 10);
        assert!(url.starts_with("http://host/exportImage?bbox="));
    }
}
