use ::failure::Error;
use ::serde::de::DeserializeOwned;
use ::std::io::Read;

/// Alternative to `serde_yaml::from_reader` that warns about unrecognized keys.
///
/// Settings types use `#[serde(default)]` heavily, so a misspelled key would otherwise
/// silently fall back to the default.
pub trait YamlRead: DeserializeOwned {
    fn from_reader(mut r: impl Read) -> Result<Self, Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only offers one for Value.
        // However, deserializing through a Value loses all location info from error
        // messages. So...
        //
        // First, parse to a form that we can read from multiple times.
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        YamlRead::from_yaml_str(&s)
    }

    fn from_yaml_str(s: &str) -> Result<Self, Error> {
        YamlRead::from_yaml_str_with_ignored(s, |path| {
            warn!("Unused config item (possible typo?): {}", path)
        })
    }

    /// `from_yaml_str`, handing the path of each unrecognized key to a callback
    /// instead of logging it.
    fn from_yaml_str_with_ignored(s: &str, mut on_ignored: impl FnMut(&str)) -> Result<Self, Error> {
        // (if this fails, the error is fine)
        let value: ::serde_yaml::Value = ::serde_yaml::from_str(s)?;

        let ignored = ::serde_ignored::deserialize(
            value,
            |path| on_ignored(&path.to_string()),
        );
        match ignored {
            Ok(out) => Ok(out),
            // That error message was surely garbage. Parse again without serde_ignored
            // to get a better one.
            Err(value_err) => match ::serde_yaml::from_str::<Self>(s) {
                Err(e) => Err(e.into()),
                Ok(_) => Err(value_err.into()),
            },
        }
    }
}

impl<T: DeserializeOwned> YamlRead for T {}
