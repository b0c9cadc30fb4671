use camino::Utf8PathBuf;
use httpmock::prelude::*;
use minerva::errors::{GetError, IdentityError, MinervaError};
use minerva::models::*;
use minerva::types::{FileId, MapId, ProjectId};
use rstest::*;
use serde_json::json;

mod helpers;
use helpers::{api, client_for, AnyResult};

#[fixture]
fn project_id() -> ProjectId {
    ProjectId::new("pd_map".to_string())
}

#[rstest]
#[tokio::test]
async fn test_projects(project_id: ProjectId) -> AnyResult {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/"));
            then.status(200).json_body(json!([
                {"projectId": "pd_map", "name": "Parkinson's disease map", "progress": 100.0,
                 "organism": {"resource": "9606", "type": "TAXONOMY"}, "newField": [1, 2]},
                {"projectId": "empty", "disease": null}
            ]));
        })
        .await;
    let projects = client_for(&server).projects().await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].project_id, Some(project_id));
    assert_eq!(projects[0].progress, Some(100.0));
    assert_eq!(
        projects[0].organism.as_ref().and_then(|o| o.annotation_type.as_deref()),
        Some("TAXONOMY")
    );
    assert_eq!(projects[1].name, None);
    assert_eq!(projects[1].disease, None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_project_and_statistics(project_id: ProjectId) -> AnyResult {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/pd_map"));
            then.status(200)
                .json_body(json!({"projectId": "pd_map", "version": "2.0"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/pd_map/statistics"));
            then.status(200).json_body(json!({
                "elementAnnotations": {"UNIPROT": 12, "HGNC": 3},
                "reactionAnnotations": null,
                "publications": 7
            }));
        })
        .await;
    let client = client_for(&server);
    let project = client.project(project_id.clone()).await?;
    assert_eq!(project.version.as_deref(), Some("2.0"));

    let statistics = client.project_statistics(&project).await?;
    assert_eq!(statistics.element_annotations.get("UNIPROT"), Some(&12));
    assert!(statistics.reaction_annotations.is_empty());
    assert_eq!(statistics.publications, Some(7));
    assert_eq!(statistics.project_id, Some(project_id));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_maps_remember_their_project(project_id: ProjectId) -> AnyResult {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/pd_map/models/"));
            then.status(200).json_body(json!([
                {"idObject": 1, "name": "PD map", "width": 40000, "authors": null},
                {"idObject": 2, "name": "submap", "projectId": "payload_wins"}
            ]));
        })
        .await;
    let maps = client_for(&server).maps("pd_map").await?;
    assert_eq!(maps[0].id_object, Some(MapId(1)));
    assert_eq!(maps[0].width, Some(40000.0));
    assert!(maps[0].authors.is_empty());
    assert_eq!(maps[0].project_id, Some(project_id));
    assert_eq!(
        maps[1].project_id,
        Some(ProjectId::new("payload_wins".to_string()))
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_map_by_id_and_project(project_id: ProjectId) -> AnyResult {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/pd_map/models/42"));
            then.status(200)
                .json_body(json!({"idObject": 42, "name": "submap"}));
        })
        .await;
    let client = client_for(&server);
    let by_pair = client
        .map((MapId(42), project_id.clone()), None)
        .await?;
    let by_id = client.map(MapId(42), Some(project_id.clone().into())).await?;
    let refreshed = client.map(&by_id, None).await?;
    assert_eq!(by_pair, by_id);
    assert_eq!(refreshed, by_id);
    assert_eq!(by_id.project_id, Some(project_id));
    mock.assert_hits_async(3).await;
    Ok(())
}

#[tokio::test]
async fn test_map_without_project() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);
    let error = client.map(MapId(42), None).await.unwrap_err();
    match error {
        GetError::Identity(e) => assert_eq!(e, IdentityError::MissingParent { kind: "map" }),
        other => panic!("expected identity error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_is_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/nope"));
            then.status(404).body("Project with given id doesn't exist");
        })
        .await;
    let error = client_for(&server).project("nope").await.unwrap_err();
    match error {
        GetError::Request(MinervaError::Service { status, text, .. }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(text, "Project with given id doesn't exist");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_shape_is_shape_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("projects/pd_map"));
            then.status(200).json_body(json!({"progress": "almost done"}));
        })
        .await;
    let error = client_for(&server).project("pd_map").await.unwrap_err();
    assert!(matches!(error, GetError::Shape(e) if e.kind == "project"));
}

#[tokio::test]
async fn test_configuration() -> AnyResult {
    let server = MockServer::start_async().await;
    let option = json!({
        "idObject": 3, "type": "DEFAULT_MAP", "value": "pd_map",
        "valueType": "STRING", "isServerSide": false, "commonName": "Default project"
    });
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("configuration/"));
            then.status(200).json_body(json!({
                "version": "16.0.0",
                "options": [option.clone()],
                "imageFormats": [{"name": "PNG image", "extension": "png",
                                  "handler": "lcsb.mapviewer.converter.graphics.PngImageGenerator"}],
                "modelFormats": null,
                "miriamTypes": {"UNIPROT": {"commonName": "Uniprot", "uris": ["urn:miriam:uniprot"]}}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("configuration/options/"));
            then.status(200).json_body(json!([option.clone()]));
        })
        .await;
    let client = client_for(&server);
    let configuration = client.configuration().await?;
    assert_eq!(configuration.version.as_deref(), Some("16.0.0"));
    assert!(configuration.model_formats.is_empty());
    assert_eq!(configuration.image_formats.len(), 1);
    assert_eq!(
        configuration.miriam_types["UNIPROT"].uris,
        vec!["urn:miriam:uniprot".to_string()]
    );
    let default_map = configuration.option("DEFAULT_MAP").unwrap();
    assert_eq!(default_map.value.as_deref(), Some("pd_map"));

    let options = client.options().await?;
    assert_eq!(options, configuration.options);
    Ok(())
}

#[tokio::test]
async fn test_upload_file() -> AnyResult {
    let dir = tempfile::tempdir()?;
    let local = Utf8PathBuf::from_path_buf(dir.path().join("model.xml")).unwrap();
    fs_err::write(&local, b"<sbml/>")?;

    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api("files/"))
                .query_param("filename", "model.xml")
                .query_param("length", "7");
            then.status(200).json_body(json!({
                "id": 5, "filename": "model.xml", "length": 7,
                "owner": "admin", "uploadedDataLength": 0
            }));
        })
        .await;
    let upload = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api("files/5:uploadContent"))
                .header("content-type", "application/octet-stream")
                .body("<sbml/>");
            then.status(200).json_body(json!({
                "id": 5, "filename": "model.xml", "length": 7,
                "owner": "admin", "uploadedDataLength": 7
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api("files/5"));
            then.status(200).json_body(json!({"id": 5, "length": 7, "uploadedDataLength": 7}));
        })
        .await;

    let client = client_for(&server);
    let uploaded = client.upload_file(&local, "model.xml", None).await?;
    create.assert_async().await;
    upload.assert_async().await;
    assert_eq!(uploaded.id, Some(FileId(5)));
    assert!(uploaded.is_complete());

    let fetched = client.file(FileId(5)).await?;
    assert!(fetched.is_complete());
    Ok(())
}

#[tokio::test]
async fn test_upload_content_needs_file_id() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);
    let unsaved = File::default();
    assert!(client.upload_content(&b"data"[..], &unsaved).await.is_err());
}
