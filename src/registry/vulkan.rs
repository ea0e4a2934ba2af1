//! Static expansion table for the `vkTools::initializers::` helpers used by
//! the Sascha Willems Vulkan samples.
//!
//! Pure data. Field order matches the order the assignments should appear in
//! the rewritten source, which is not always the struct's declaration order.

use anyhow::Result;

use super::MethodDescriptor;

/// All known descriptors, in registration order.
///
/// `writeDescriptorSet/4` is intentionally registered twice: the same helper
/// signature is used for buffer writes and image writes, and only the caller
/// knows which one applies.
pub fn descriptors() -> Result<Vec<MethodDescriptor>> {
    let sampler_create_info_0: &[(&str, &str)] = &[
        ("sType", "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO"),
        ("pNext", "nullptr"),
    ];

    Ok(vec![
        MethodDescriptor::new(
            "bufferCreateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "bufferCreateInfo",
            2,
            &[
                ("sType", "VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("flags", "0"),
                ("size", "#1"),
                ("usage", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "bufferMemoryBarrier",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_BUFFER_MEMORY_BARRIER"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "commandBufferAllocateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_COMMAND_BUFFER_ALLOCATE_INFO"),
                ("commandPool", "#0"),
                ("level", "#1"),
                ("commandBufferCount", "#2"),
            ],
        )?,
        MethodDescriptor::new(
            "commandPoolCreateInfo",
            0,
            &[("sType", "VK_STRUCTURE_TYPE_COMMAND_POOL_CREATE_INFO")],
        )?,
        MethodDescriptor::new(
            "commandBufferBeginInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_COMMAND_BUFFER_BEGIN_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "commandBufferInheritanceInfo",
            0,
            &[("sType", "VK_STRUCTURE_TYPE_COMMAND_BUFFER_INHERITANCE_INFO")],
        )?,
        MethodDescriptor::new(
            "computePipelineCreateInfo",
            2,
            &[
                ("sType", "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO"),
                ("flags", "#1"),
                ("layout", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorImageInfo",
            3,
            &[
                ("sampler", "#0"),
                ("imageView", "#1"),
                ("imageLayout", "#2"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorPoolCreateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_DESCRIPTOR_POOL_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("maxSets", "#2"),
                ("poolSizeCount", "#0"),
                ("pPoolSizes", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorPoolSize",
            2,
            &[("type", "#0"), ("descriptorCount", "#1")],
        )?,
        MethodDescriptor::new(
            "descriptorSetAllocateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_ALLOCATE_INFO"),
                ("pNext", "nullptr"),
                ("descriptorPool", "#0"),
                ("descriptorSetCount", "#2"),
                ("pSetLayouts", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorSetLayoutCreateInfo",
            2,
            &[
                ("sType", "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("bindingCount", "#1"),
                ("pBindings", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorSetLayoutBinding",
            3,
            &[
                ("binding", "#2"),
                ("descriptorType", "#0"),
                ("descriptorCount", "1"),
                ("stageFlags", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "descriptorSetLayoutBinding",
            4,
            &[
                ("binding", "#2"),
                ("descriptorType", "#0"),
                ("descriptorCount", "#3"),
                ("stageFlags", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "eventCreateInfo",
            0,
            &[("sType", "VK_STRUCTURE_TYPE_EVENT_CREATE_INFO")],
        )?,
        MethodDescriptor::new(
            "fenceCreateInfo",
            1,
            &[
                ("sType", "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO"),
                ("flags", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "framebufferCreateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_FRAMEBUFFER_CREATE_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "imageCreateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "imageMemoryBarrier",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_IMAGE_MEMORY_BARRIER"),
                ("pNext", "nullptr"),
                ("srcQueueFamilyIndex", "VK_QUEUE_FAMILY_IGNORED"),
                ("dstQueueFamilyIndex", "VK_QUEUE_FAMILY_IGNORED"),
            ],
        )?,
        // imageViewCreateInfo has always shipped with the sampler field
        // list in this table.
        MethodDescriptor::new("imageViewCreateInfo", 0, sampler_create_info_0)?,
        MethodDescriptor::new(
            "memoryAllocateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_MEMORY_ALLOCATE_INFO"),
                ("pNext", "nullptr"),
                ("allocationSize", "0"),
                ("memoryTypeIndex", "0"),
            ],
        )?,
        MethodDescriptor::new(
            "memoryBarrier",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_MEMORY_BARRIER"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineColorBlendAttachmentState",
            2,
            &[("blendEnable", "#1"), ("colorWriteMask", "#0")],
        )?,
        MethodDescriptor::new(
            "pipelineColorBlendStateCreateInfo",
            2,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
                ),
                ("pNext", "nullptr"),
                ("attachmentCount", "#0"),
                ("pAttachments", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineCreateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("flags", "#2"),
                ("layout", "#0"),
                ("renderPass", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineDepthStencilStateCreateInfo",
            3,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO",
                ),
                ("depthTestEnable", "#0"),
                ("depthWriteEnable", "#1"),
                ("depthCompareOp", "#2"),
                ("front.compareOp", "VK_COMPARE_OP_ALWAYS"),
                ("back.compareOp", "VK_COMPARE_OP_ALWAYS"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineDynamicStateCreateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_PIPELINE_DYNAMIC_STATE_CREATE_INFO"),
                ("flags", "#2"),
                ("dynamicStateCount", "#1"),
                ("pDynamicStates", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineInputAssemblyStateCreateInfo",
            3,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
                ),
                ("flags", "#1"),
                ("topology", "#0"),
                ("primitiveRestartEnable", "#2"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineLayoutCreateInfo",
            2,
            &[
                ("sType", "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("setLayoutCount", "#1"),
                ("pSetLayouts", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineMultisampleStateCreateInfo",
            2,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
                ),
                ("flags", "#1"),
                ("rasterizationSamples", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineRasterizationStateCreateInfo",
            4,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_STATE_CREATE_INFO",
                ),
                ("flags", "#3"),
                ("polygonMode", "#0"),
                ("cullMode", "#1"),
                ("frontFace", "#2"),
                ("depthClampEnable", "VK_FALSE"),
                ("lineWidth", "1.0f"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineTessellationStateCreateInfo",
            1,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_STATE_CREATE_INFO",
                ),
                ("patchControlPoints", "#0"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineVertexInputStateCreateInfo",
            0,
            &[
                (
                    "sType",
                    "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
                ),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "pipelineViewportStateCreateInfo",
            3,
            &[
                ("sType", "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO"),
                ("flags", "#2"),
                ("viewportCount", "#0"),
                ("scissorCount", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "rect2D",
            4,
            &[
                ("rect2D.offset.x", "#2"),
                ("rect2D.offset.y", "#3"),
                ("rect2D.extent.width", "#0"),
                ("rect2D.extent.height", "#1"),
            ],
        )?,
        MethodDescriptor::new(
            "renderPassBeginInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_RENDER_PASS_BEGIN_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "renderPassCreateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new("samplerCreateInfo", 0, sampler_create_info_0)?,
        MethodDescriptor::new(
            "semaphoreCreateInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO"),
                ("pNext", "nullptr"),
                ("flags", "0"),
            ],
        )?,
        MethodDescriptor::new(
            "submitInfo",
            0,
            &[
                ("sType", "VK_STRUCTURE_TYPE_SUBMIT_INFO"),
                ("pNext", "nullptr"),
            ],
        )?,
        MethodDescriptor::new(
            "vertexInputBindingDescription",
            3,
            &[("binding", "#0"), ("stride", "#1"), ("inputRate", "#2")],
        )?,
        MethodDescriptor::new(
            "vertexInputAttributeDescription",
            4,
            &[
                ("location", "#1"),
                ("binding", "#0"),
                ("format", "#2"),
                ("offset", "#3"),
            ],
        )?,
        MethodDescriptor::new(
            "viewport",
            4,
            &[
                ("width", "#0"),
                ("height", "#1"),
                ("minDepth", "#2"),
                ("maxDepth", "#3"),
            ],
        )?,
        MethodDescriptor::new(
            "writeDescriptorSet",
            4,
            &[
                ("sType", "VK_STRUCTURE_TYPE_WRITE_DESCRIPTOR_SET"),
                ("pNext", "nullptr"),
                ("dstSet", "#0"),
                ("dstBinding", "#2"),
                ("descriptorCount", "1"),
                ("descriptorType", "#1"),
                ("pBufferInfo", "#3"),
            ],
        )?,
        MethodDescriptor::new(
            "writeDescriptorSet",
            4,
            &[
                ("sType", "VK_STRUCTURE_TYPE_WRITE_DESCRIPTOR_SET"),
                ("pNext", "nullptr"),
                ("dstSet", "#0"),
                ("dstBinding", "#2"),
                ("descriptorCount", "1"),
                ("descriptorType", "#1"),
                ("pImageInfo", "#3"),
            ],
        )?,
    ])
}
