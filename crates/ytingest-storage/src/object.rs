//! Operations shared by the `object_store`-backed implementations.

use bytes::Bytes;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

/// Put `data` at `key` with its `Content-Type` attribute set.
pub(crate) async fn put_with_content_type<S: ObjectStore>(
    store: &S,
    key: &str,
    data: Vec<u8>,
    content_type: &str,
) -> Result<(), ObjectStoreError> {
    let mut attributes = Attributes::new();
    attributes.insert(Attribute::ContentType, content_type.to_string().into());
    let opts = PutOptions {
        attributes,
        ..Default::default()
    };

    let location = Path::from(key.to_string());
    store
        .put_opts(&location, PutPayload::from(Bytes::from(data)), opts)
        .await?;
    Ok(())
}
