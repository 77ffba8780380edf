// src/application/commands/images/create.rs
use super::ImageCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::params::ParamSource,
    },
    domain::image::{DisplayName, FileName, NewImageDocument, UploadedTimestamp},
};

pub struct NewImageCommand {
    pub display_name: String,
    pub file_name: String,
    pub user_id: String,
}

impl NewImageCommand {
    /// Reads `displayName`, `fileName` and `userId` from the request.
    pub fn from_params<P: ParamSource + ?Sized>(params: &P) -> ApplicationResult<Self> {
        Ok(Self {
            display_name: required(params, "displayName")?,
            file_name: required(params, "fileName")?,
            user_id: required(params, "userId")?,
        })
    }
}

fn required<P: ParamSource + ?Sized>(params: &P, name: &str) -> ApplicationResult<String> {
    params.param(name).map(str::to_owned).ok_or_else(|| {
        tracing::warn!(param = name, "image upload request missing parameter");
        ApplicationError::invalid_image_request(format!("missing parameter '{name}'"))
    })
}

impl ImageCommandService {
    /// Builds the metadata document for an upload straight from the
    /// request parameters.
    pub fn build_image_document<P: ParamSource + ?Sized>(
        &self,
        params: &P,
    ) -> ApplicationResult<NewImageDocument> {
        let command = NewImageCommand::from_params(params)?;
        self.new_image_document(command)
    }

    pub fn new_image_document(
        &self,
        command: NewImageCommand,
    ) -> ApplicationResult<NewImageDocument> {
        let file_name = FileName::new(command.file_name)?;
        let extension = file_name.extension()?;

        let content_type = self
            .content_types
            .content_type_for_extension(&extension)
            .ok_or_else(|| {
                tracing::warn!(%file_name, extension = %extension, "unsupported image extension");
                ApplicationError::invalid_image_request(format!(
                    "unsupported file extension '{extension}'"
                ))
            })?;

        let uploaded_ts = UploadedTimestamp::from_datetime(self.clock.now());
        let display_name = DisplayName::from_request(&command.display_name);

        Ok(NewImageDocument::new(
            content_type,
            file_name,
            command.user_id,
            display_name,
            uploaded_ts,
        ))
    }
}
