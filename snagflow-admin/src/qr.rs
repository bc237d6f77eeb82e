use url::Url;

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Build the image URL for a QR code pointing at `target`.
///
/// The dashboard shows this next to the survey link so the form can be
/// opened by scanning a poster.
pub fn qr_image_url(target: &str) -> Url {
    let mut url = Url::parse(QR_ENDPOINT).expect("static endpoint URL is valid");
    url.query_pairs_mut()
        .append_pair("size", "250x250")
        .append_pair("data", target);
    url
}
