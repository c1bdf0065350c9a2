/// Header block of a creator profile page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorHeader {
    /// Bio text under the creator name
    pub bio: String,
    /// href of the first link shown in the header, if any
    pub link: Option<String>,
}
