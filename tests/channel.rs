mod tests {
    use fire_strip::channel::{Channel, Mailbox, TryReceiveError, TrySendError};

    #[test]
    fn test_channel_is_fifo_and_bounded() {
        let channel: Channel<u8, 2> = Channel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert_eq!(sender.try_send(1), Ok(()));
        assert_eq!(sender.try_send(2), Ok(()));
        assert_eq!(sender.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_mailbox_keeps_latest_value() {
        let mailbox: Mailbox<u32> = Mailbox::new();
        assert_eq!(mailbox.take(), None);

        assert!(!mailbox.publish(1));
        assert!(mailbox.publish(2));
        assert!(mailbox.is_full());

        assert_eq!(mailbox.take(), Some(2));
        assert_eq!(mailbox.take(), None);
        assert!(!mailbox.is_full());
    }
}
