use cvchat_persist::{ThreadRecord, ThreadResumeLink};

#[test]
fn test_thread_record_keeps_external_id() {
    let record = ThreadRecord::new("thread_abc123", "Screening round");

    assert_eq!(record.id, "thread_abc123");
    assert_eq!(record.name, "Screening round");
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_link_pair() {
    let link = ThreadResumeLink::new("thread_abc123", "resume-7");
    assert_eq!(link.thread_id, "thread_abc123");
    assert_eq!(link.resume_id, "resume-7");
}

#[cfg(feature = "mongodb")]
mod mongo {
    use cvchat_persist::mongo::models::{MongoThread, MongoThreadLink};
    use cvchat_persist::{ThreadRecord, ThreadResumeLink};

    #[test]
    fn test_thread_conversion_roundtrip() {
        let record = ThreadRecord::new("thread_abc123", "Screening round");

        let mongo: MongoThread = record.clone().into();
        assert_eq!(mongo.id, record.id);

        let back: ThreadRecord = mongo.into();
        assert_eq!(back.id, record.id);
        assert_eq!(back.name, record.name);
        assert_eq!(back.created_at, record.created_at);
    }

    #[test]
    fn test_link_conversion_roundtrip() {
        let link = ThreadResumeLink::new("thread_abc123", "resume-7");
        let mongo: MongoThreadLink = link.clone().into();
        let back: ThreadResumeLink = mongo.into();
        assert_eq!(back, link);
    }
}
