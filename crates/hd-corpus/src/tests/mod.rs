
use crate::podcast::Podcast;

pub(crate) fn podcast(title: &str, text: &str) -> Podcast {
    Podcast {
        title: title.to_string(),
        text: text.to_string(),
        link: String::new(),
        mp3_url: String::new(),
    }
}
