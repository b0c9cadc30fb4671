use super::base::MinervaClient;
use crate::download::{fetch, OCTET_STREAM};
use crate::errors::{FileIOError, GetError};
use crate::formats::Format;
use crate::models::{ConverterList, ConverterNames};
use crate::schema::Context;
use crate::urls::{action, CONVERT, CONVERT_IMAGE};
use bytes::Bytes;
use camino::Utf8Path;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::collections::BTreeSet;

impl MinervaClient {
    /// List the formats MINERVA can convert from (inputs) and to (outputs).
    ///
    /// `to_image` includes the image generators, `to_format` includes the
    /// model converters.
    pub async fn formats(
        &self,
        to_image: bool,
        to_format: bool,
    ) -> Result<(BTreeSet<Format>, BTreeSet<Format>), GetError> {
        let mut inputs = BTreeSet::new();
        let mut outputs = BTreeSet::new();
        let listings = [(to_format, CONVERT), (to_image, CONVERT_IMAGE)];
        for (wanted, endpoint) in listings {
            if !wanted {
                continue;
            }
            let url = self.endpoint(&[endpoint]);
            let list: ConverterList = self.get_one(&url, &Context::new()).await?;
            inputs.extend(known_formats(&list.inputs));
            outputs.extend(known_formats(&list.outputs));
        }
        Ok((inputs, outputs))
    }

    /// Convert a map from one format to another.
    ///
    /// If `sink` is given, the result is also written to that file.
    pub async fn convert(
        &self,
        input: impl Into<Bytes>,
        input_format: Format,
        output_format: Format,
        unzip: bool,
        sink: Option<&Utf8Path>,
    ) -> Result<Bytes, FileIOError> {
        let suffix = action(input_format.handler(), output_format.handler());
        let url = self.endpoint(&[output_format.conversion_url(), suffix.as_str()]);
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(input.into());
        fetch(req, unzip, sink).await
    }

    /// Convert the contents of a local file. See [MinervaClient::convert].
    pub async fn convert_file(
        &self,
        input: &Utf8Path,
        input_format: Format,
        output_format: Format,
        unzip: bool,
        sink: Option<&Utf8Path>,
    ) -> Result<Bytes, FileIOError> {
        let data = fs_err::tokio::read(input.as_std_path()).await?;
        self.convert(data, input_format, output_format, unzip, sink)
            .await
    }
}

fn known_formats(converters: &[ConverterNames]) -> Vec<Format> {
    converters
        .iter()
        .flat_map(|c| c.available_names.iter())
        .filter_map(|name| {
            let format = Format::from_minerva_name(name);
            if format.is_none() {
                log::warn!("MINERVA lists unknown format \"{}\", skipping it", name);
            }
            format
        })
        .collect()
}
