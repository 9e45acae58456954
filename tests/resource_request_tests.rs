//! Golden-value tests for resource request builders.
//!
//! For every resource operation, the built request must carry the exact
//! documented resource template, HTTP method, and parameter set for a given
//! set of inputs. These tests assert that without any I/O.

use twilio_api::rest::resources::api::{
    Address, Call, Conference, CreateAddressParams, CreateCallParams, CreateMessageParams,
    CreateQueueParams, ListAddressParams, ListCallParams, ListConferenceParams, Message, Queue,
};
use twilio_api::rest::resources::taskrouter::{
    Activity, CreateActivityParams, CreateTaskParams, CreateTaskQueueParams, CreateWorkerParams,
    CreateWorkflowParams, CreateWorkspaceParams, Task, TaskQueue, Worker, Workflow, Workspace,
};
use twilio_api::{HttpMethod, ParamKind, ResourceError, RestRequest, SubDomain};

const ACCOUNT_SID: &str = "ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6";
const WORKSPACE_SID: &str = "WS0000000000000000000000000000000a";

fn body_params(request: &RestRequest) -> Vec<(String, String)> {
    request
        .params_of(ParamKind::Body)
        .map(|p| (p.name.clone(), p.value.clone()))
        .collect()
}

// ============================================================================
// The documented example: seven address fields, seven parameters
// ============================================================================

#[test]
fn test_add_address_with_seven_values_builds_seven_parameters() {
    let request = Address::create_request(&CreateAddressParams {
        customer_name: "Grace Hopper".to_string(),
        street: "1 Memorial Drive".to_string(),
        city: "Cambridge".to_string(),
        region: "MA".to_string(),
        postal_code: "02142".to_string(),
        iso_country: "US".to_string(),
        friendly_name: Some("HQ".to_string()),
    })
    .unwrap();

    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.domain, SubDomain::Api);
    assert_eq!(request.resource, "Accounts/{AccountSid}/Addresses.json");

    let body = body_params(&request);
    assert_eq!(body.len(), 7);
    for (name, value) in [
        ("CustomerName", "Grace Hopper"),
        ("Street", "1 Memorial Drive"),
        ("City", "Cambridge"),
        ("Region", "MA"),
        ("PostalCode", "02142"),
        ("IsoCountry", "US"),
        ("FriendlyName", "HQ"),
    ] {
        assert!(
            body.contains(&(name.to_string(), value.to_string())),
            "missing parameter {name}={value}"
        );
    }
}

// ============================================================================
// Templates and methods per operation
// ============================================================================

#[test]
fn test_core_api_templates_and_methods() {
    let sid = "XX0000000000000000000000000000000a";

    let cases: Vec<(RestRequest, HttpMethod, &str)> = vec![
        (
            Call::fetch_request(sid).unwrap(),
            HttpMethod::Get,
            "Accounts/{AccountSid}/Calls/{Sid}.json",
        ),
        (
            Call::list_request(&ListCallParams::default()).unwrap(),
            HttpMethod::Get,
            "Accounts/{AccountSid}/Calls.json",
        ),
        (
            Call::delete_request(sid).unwrap(),
            HttpMethod::Delete,
            "Accounts/{AccountSid}/Calls/{Sid}.json",
        ),
        (
            Message::fetch_request(sid).unwrap(),
            HttpMethod::Get,
            "Accounts/{AccountSid}/Messages/{Sid}.json",
        ),
        (
            Message::delete_request(sid).unwrap(),
            HttpMethod::Delete,
            "Accounts/{AccountSid}/Messages/{Sid}.json",
        ),
        (
            Conference::list_request(&ListConferenceParams::default()).unwrap(),
            HttpMethod::Get,
            "Accounts/{AccountSid}/Conferences.json",
        ),
        (
            Queue::delete_request(sid).unwrap(),
            HttpMethod::Delete,
            "Accounts/{AccountSid}/Queues/{Sid}.json",
        ),
    ];

    for (request, method, template) in cases {
        assert_eq!(request.method, method, "method for {template}");
        assert_eq!(request.resource, template);
        assert_eq!(request.domain, SubDomain::Api);
    }
}

#[test]
fn test_taskrouter_templates_and_methods() {
    let sid = "XX0000000000000000000000000000000a";

    let cases: Vec<(RestRequest, HttpMethod, &str)> = vec![
        (
            Workspace::fetch_request(sid).unwrap(),
            HttpMethod::Get,
            "Workspaces/{Sid}",
        ),
        (
            Activity::fetch_request(WORKSPACE_SID, sid).unwrap(),
            HttpMethod::Get,
            "Workspaces/{WorkspaceSid}/Activities/{Sid}",
        ),
        (
            Worker::delete_request(WORKSPACE_SID, sid).unwrap(),
            HttpMethod::Delete,
            "Workspaces/{WorkspaceSid}/Workers/{Sid}",
        ),
        (
            Workflow::fetch_request(WORKSPACE_SID, sid).unwrap(),
            HttpMethod::Get,
            "Workspaces/{WorkspaceSid}/Workflows/{Sid}",
        ),
        (
            TaskQueue::delete_request(WORKSPACE_SID, sid).unwrap(),
            HttpMethod::Delete,
            "Workspaces/{WorkspaceSid}/TaskQueues/{Sid}",
        ),
        (
            Task::fetch_request(WORKSPACE_SID, sid).unwrap(),
            HttpMethod::Get,
            "Workspaces/{WorkspaceSid}/Tasks/{Sid}",
        ),
    ];

    for (request, method, template) in cases {
        assert_eq!(request.method, method, "method for {template}");
        assert_eq!(request.resource, template);
        assert_eq!(request.domain, SubDomain::TaskRouter);
    }
}

// ============================================================================
// Placeholders fully resolve when all path parameters are supplied
// ============================================================================

#[test]
fn test_all_sid_scoped_requests_resolve_without_leftover_placeholders() {
    let sid = "XX0000000000000000000000000000000a";

    let requests = vec![
        Address::fetch_request(sid).unwrap(),
        Address::delete_request(sid).unwrap(),
        Call::fetch_request(sid).unwrap(),
        Message::delete_request(sid).unwrap(),
        Conference::fetch_request(sid).unwrap(),
        Queue::fetch_request(sid).unwrap(),
        Workspace::delete_request(sid).unwrap(),
        Activity::fetch_request(WORKSPACE_SID, sid).unwrap(),
        Worker::fetch_request(WORKSPACE_SID, sid).unwrap(),
        Workflow::delete_request(WORKSPACE_SID, sid).unwrap(),
        TaskQueue::fetch_request(WORKSPACE_SID, sid).unwrap(),
        Task::delete_request(WORKSPACE_SID, sid).unwrap(),
    ];

    for request in requests {
        let path = request.resolve_path(ACCOUNT_SID);
        assert!(
            !path.contains('{') && !path.contains('}'),
            "unresolved placeholder in {path}"
        );
    }
}

// ============================================================================
// Optional parameters never appear when absent
// ============================================================================

#[test]
fn test_optional_parameters_absent_from_input_never_appear() {
    let call = Call::create_request(&CreateCallParams {
        to: "+14155551234".to_string(),
        from: "+14155556789".to_string(),
        url: "https://example.com/voice.xml".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(call.params_of(ParamKind::Body).count(), 3);

    let message = Message::create_request(&CreateMessageParams {
        to: "+14155551234".to_string(),
        from: "+14155556789".to_string(),
        body: "hi".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(message.params_of(ParamKind::Body).count(), 3);

    let queue = Queue::create_request(&CreateQueueParams {
        friendly_name: "support".to_string(),
        max_size: None,
    })
    .unwrap();
    assert_eq!(queue.params_of(ParamKind::Body).count(), 1);

    let workspace = Workspace::create_request(&CreateWorkspaceParams {
        friendly_name: "Support".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(workspace.params_of(ParamKind::Body).count(), 1);

    let worker = Worker::create_request(
        WORKSPACE_SID,
        &CreateWorkerParams {
            friendly_name: "Alice".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(worker.params_of(ParamKind::Body).count(), 1);

    let task = Task::create_request(
        WORKSPACE_SID,
        &CreateTaskParams {
            workflow_sid: "WW0000000000000000000000000000000a".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(task.params_of(ParamKind::Body).count(), 1);

    let list = Address::list_request(&ListAddressParams::default()).unwrap();
    assert_eq!(list.params_of(ParamKind::QueryString).count(), 0);
}

// ============================================================================
// Required-argument validation fails fast, naming the argument
// ============================================================================

#[test]
fn test_required_argument_validation_names_the_missing_field() {
    let cases: Vec<(Result<RestRequest, ResourceError>, &str)> = vec![
        (
            Address::create_request(&CreateAddressParams::default()),
            "CustomerName",
        ),
        (
            Call::create_request(&CreateCallParams::default()),
            "To",
        ),
        (
            Message::create_request(&CreateMessageParams::default()),
            "To",
        ),
        (
            Queue::create_request(&CreateQueueParams::default()),
            "FriendlyName",
        ),
        (
            Workspace::create_request(&CreateWorkspaceParams::default()),
            "FriendlyName",
        ),
        (
            Activity::create_request(WORKSPACE_SID, &CreateActivityParams::default()),
            "FriendlyName",
        ),
        (
            Workflow::create_request(WORKSPACE_SID, &CreateWorkflowParams::default()),
            "FriendlyName",
        ),
        (
            TaskQueue::create_request(WORKSPACE_SID, &CreateTaskQueueParams::default()),
            "FriendlyName",
        ),
        (
            Task::create_request(WORKSPACE_SID, &CreateTaskParams::default()),
            "WorkflowSid",
        ),
        (Address::fetch_request(""), "Sid"),
        (Worker::list_request("", &Default::default()), "WorkspaceSid"),
    ];

    for (result, expected) in cases {
        match result {
            Err(ResourceError::EmptyArgument { argument }) => {
                assert_eq!(argument, expected);
            }
            other => panic!("expected EmptyArgument({expected}), got {other:?}"),
        }
    }
}
