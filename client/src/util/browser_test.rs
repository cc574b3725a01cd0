use super::*;

#[test]
fn upload_failed_message_includes_reason() {
    assert_eq!(upload_failed_message("mime type not supported"), "Ошибка загрузки файла: mime type not supported");
}

#[test]
fn write_failure_messages_are_distinct() {
    let all = [CREATE_CAMPAIGN_FAILED, ADD_FAILED, UPDATE_FAILED, DELETE_FAILED];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
